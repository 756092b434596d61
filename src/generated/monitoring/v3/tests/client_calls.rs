// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Verify the client calls the stub with the expected request for each of
//! the supported ways to build a request: a mapping of field names to values,
//! the builder setters, and a typed request. Each form is also used with
//! explicit request options.

#[cfg(test)]
mod tests {
    use google_cloud_monitoring_v3::{client, model, stub};
    use gax::options::RequestOptionsBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Result = anyhow::Result<()>;
    type OptionsLog = Arc<Mutex<Vec<gax::options::RequestOptions>>>;

    const TIMEOUT: Duration = Duration::from_secs(42);

    // The forms in each test, in order: mapping, mapping with a timeout,
    // setters, typed request, typed request with options.
    const WANT_TIMEOUTS: [Option<Duration>; 5] = [None, Some(TIMEOUT), None, None, Some(TIMEOUT)];

    mockall::mock! {
        #[derive(Debug)]
        ServiceMonitoringService {}
        impl stub::ServiceMonitoringService for ServiceMonitoringService {
            async fn create_service(
                &self,
                req: model::CreateServiceRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::Service>>;
            async fn get_service(
                &self,
                req: model::GetServiceRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::Service>>;
            async fn list_services(
                &self,
                req: model::ListServicesRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListServicesResponse>>;
            async fn update_service(
                &self,
                req: model::UpdateServiceRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::Service>>;
            async fn delete_service(
                &self,
                req: model::DeleteServiceRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<wkt::Empty>>;
            async fn create_service_level_objective(
                &self,
                req: model::CreateServiceLevelObjectiveRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ServiceLevelObjective>>;
            async fn get_service_level_objective(
                &self,
                req: model::GetServiceLevelObjectiveRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ServiceLevelObjective>>;
            async fn list_service_level_objectives(
                &self,
                req: model::ListServiceLevelObjectivesRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListServiceLevelObjectivesResponse>>;
            async fn update_service_level_objective(
                &self,
                req: model::UpdateServiceLevelObjectiveRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ServiceLevelObjective>>;
            async fn delete_service_level_objective(
                &self,
                req: model::DeleteServiceLevelObjectiveRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<wkt::Empty>>;
        }
    }

    fn ok_response<T>(body: T) -> gax::Result<gax::response::Response<T>> {
        let parts = gax::response::Parts::new().set_status_code(200);
        Ok(gax::response::Response::from_parts(parts, body))
    }

    fn check_options(log: &OptionsLog) {
        let log = log.lock().expect("options log is not poisoned");
        let timeouts = log.iter().map(|o| *o.timeout()).collect::<Vec<_>>();
        assert_eq!(timeouts, WANT_TIMEOUTS);
        for options in log.iter() {
            assert!(
                options.headers().contains_key("x-goog-api-client"),
                "{options:?}"
            );
        }
    }

    #[tokio::test]
    async fn create_service() -> Result {
        let request = model::CreateServiceRequest::new()
            .set_parent("projects/p")
            .set_service_id("checkout")
            .set_service(
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Checkout"),
            );
        let response = model::Service::new()
            .set_name("projects/p/services/s")
            .set_display_name("Checkout");

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_create_service()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .create_service()
            .with_fields(json!({
                "parent": "projects/p",
                "service_id": "checkout",
                "service": {"name": "projects/p/services/s", "displayName": "Checkout"}
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .create_service()
            .with_fields(json!({
                "parent": "projects/p",
                "serviceId": "checkout",
                "service": {"name": "projects/p/services/s", "displayName": "Checkout"}
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .create_service()
            .set_parent("projects/p")
            .set_service_id("checkout")
            .set_service(
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Checkout"),
            )
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .create_service()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .create_service()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn create_service_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .create_service()
            .with_fields(json!({"parent": "projects/p"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client
            .create_service()
            .with_fields(json!({"parent": "projects/p", "service": "not-an-object"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn get_service() -> Result {
        let request = model::GetServiceRequest::new().set_name("projects/p/services/s");
        let response = model::Service::new()
            .set_name("projects/p/services/s")
            .set_display_name("Checkout");

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_get_service()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .get_service()
            .with_fields(json!({
                "name": "projects/p/services/s"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .get_service()
            .with_fields(json!({
                "name": "projects/p/services/s"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .get_service()
            .set_name("projects/p/services/s")
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .get_service()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .get_service()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn get_service_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client.get_service().with_fields(json!({}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client.get_service().with_fields(json!({"name": null}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client.get_service().with_fields(json!({"name": 42}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client
            .get_service()
            .with_fields(json!(["projects/p/services/s"]));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn list_services() -> Result {
        let request = model::ListServicesRequest::new()
            .set_parent("projects/p")
            .set_filter("identifier_case:CUSTOM")
            .set_page_size(25)
            .set_page_token("abc");
        let response = model::ListServicesResponse::new()
            .set_services([
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Checkout"),
            ])
            .set_next_page_token("def");

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_list_services()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .list_services()
            .with_fields(json!({
                "parent": "projects/p",
                "filter": "identifier_case:CUSTOM",
                "page_size": 25,
                "page_token": "abc"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .list_services()
            .with_fields(json!({
                "parent": "projects/p",
                "filter": "identifier_case:CUSTOM",
                "pageSize": 25,
                "pageToken": "abc"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .list_services()
            .set_parent("projects/p")
            .set_filter("identifier_case:CUSTOM")
            .set_page_size(25)
            .set_page_token("abc")
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .list_services()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .list_services()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn list_services_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client.list_services().with_fields(json!({"filter": "x"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client
            .list_services()
            .with_fields(json!({"parent": "projects/p", "page_size": "ten"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client
            .list_services()
            .with_fields(json!({"parent": "projects/p", "pageCount": 10}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn update_service() -> Result {
        let request = model::UpdateServiceRequest::new()
            .set_service(
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Checkout"),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["displayName"]));
        let response = model::Service::new()
            .set_name("projects/p/services/s")
            .set_display_name("Checkout");

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_update_service()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .update_service()
            .with_fields(json!({
                "service": {"name": "projects/p/services/s", "displayName": "Checkout"},
                "update_mask": "displayName"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .update_service()
            .with_fields(json!({
                "service": {"name": "projects/p/services/s", "displayName": "Checkout"},
                "updateMask": "displayName"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .update_service()
            .set_service(
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Checkout"),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["displayName"]))
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .update_service()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .update_service()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn update_service_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .update_service()
            .with_fields(json!({"update_mask": "displayName"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn delete_service() -> Result {
        let request = model::DeleteServiceRequest::new().set_name("projects/p/services/s");
        let response = wkt::Empty::default();

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_delete_service()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .delete_service()
            .with_fields(json!({
                "name": "projects/p/services/s"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .delete_service()
            .with_fields(json!({
                "name": "projects/p/services/s"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .delete_service()
            .set_name("projects/p/services/s")
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .delete_service()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .delete_service()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn delete_service_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client.delete_service().with_fields(json!({}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn create_service_level_objective() -> Result {
        let request = model::CreateServiceLevelObjectiveRequest::new()
            .set_parent("projects/p/services/s")
            .set_service_level_objective_id("slo")
            .set_service_level_objective(
                model::ServiceLevelObjective::new()
                    .set_name("projects/p/services/s/serviceLevelObjectives/slo")
                    .set_goal(0.99),
            );
        let response = model::ServiceLevelObjective::new()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .set_goal(0.99);

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_create_service_level_objective()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .create_service_level_objective()
            .with_fields(json!({
                "parent": "projects/p/services/s",
                "service_level_objective_id": "slo",
                "service_level_objective": {
                    "name": "projects/p/services/s/serviceLevelObjectives/slo",
                    "goal": 0.99
                }
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .create_service_level_objective()
            .with_fields(json!({
                "parent": "projects/p/services/s",
                "serviceLevelObjectiveId": "slo",
                "serviceLevelObjective": {
                    "name": "projects/p/services/s/serviceLevelObjectives/slo",
                    "goal": 0.99
                }
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .create_service_level_objective()
            .set_parent("projects/p/services/s")
            .set_service_level_objective_id("slo")
            .set_service_level_objective(
                model::ServiceLevelObjective::new()
                    .set_name("projects/p/services/s/serviceLevelObjectives/slo")
                    .set_goal(0.99),
            )
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .create_service_level_objective()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .create_service_level_objective()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn create_service_level_objective_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .create_service_level_objective()
            .with_fields(json!({"parent": "projects/p/services/s"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn get_service_level_objective() -> Result {
        let request = model::GetServiceLevelObjectiveRequest::new()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .set_view(model::service_level_objective::View::Explicit);
        let response = model::ServiceLevelObjective::new()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .set_goal(0.99);

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_get_service_level_objective()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .get_service_level_objective()
            .with_fields(json!({
                "name": "projects/p/services/s/serviceLevelObjectives/slo",
                "view": "EXPLICIT"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .get_service_level_objective()
            .with_fields(json!({
                "name": "projects/p/services/s/serviceLevelObjectives/slo",
                "view": "EXPLICIT"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .get_service_level_objective()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .set_view(model::service_level_objective::View::Explicit)
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .get_service_level_objective()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .get_service_level_objective()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn get_service_level_objective_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .get_service_level_objective()
            .with_fields(json!({"view": "FULL"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = client
            .get_service_level_objective()
            .with_fields(json!({"name": "n", "view": true}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn list_service_level_objectives() -> Result {
        let request = model::ListServiceLevelObjectivesRequest::new()
            .set_parent("projects/p/services/s")
            .set_filter("goal > 0.9")
            .set_page_size(10)
            .set_page_token("abc")
            .set_view(model::service_level_objective::View::Full);
        let response = model::ListServiceLevelObjectivesResponse::new()
            .set_service_level_objectives([
                model::ServiceLevelObjective::new()
                    .set_name("projects/p/services/s/serviceLevelObjectives/slo")
                    .set_goal(0.99),
            ]);

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_list_service_level_objectives()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .list_service_level_objectives()
            .with_fields(json!({
                "parent": "projects/p/services/s",
                "filter": "goal > 0.9",
                "page_size": 10,
                "page_token": "abc",
                "view": "FULL"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .list_service_level_objectives()
            .with_fields(json!({
                "parent": "projects/p/services/s",
                "filter": "goal > 0.9",
                "pageSize": 10,
                "pageToken": "abc",
                "view": "FULL"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .list_service_level_objectives()
            .set_parent("projects/p/services/s")
            .set_filter("goal > 0.9")
            .set_page_size(10)
            .set_page_token("abc")
            .set_view(model::service_level_objective::View::Full)
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .list_service_level_objectives()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .list_service_level_objectives()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn list_service_level_objectives_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .list_service_level_objectives()
            .with_fields(json!({}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn update_service_level_objective() -> Result {
        let request = model::UpdateServiceLevelObjectiveRequest::new()
            .set_service_level_objective(
                model::ServiceLevelObjective::new()
                    .set_name("projects/p/services/s/serviceLevelObjectives/slo")
                    .set_goal(0.99),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["goal"]));
        let response = model::ServiceLevelObjective::new()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .set_goal(0.99);

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_update_service_level_objective()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .update_service_level_objective()
            .with_fields(json!({
                "service_level_objective": {
                    "name": "projects/p/services/s/serviceLevelObjectives/slo",
                    "goal": 0.99
                },
                "update_mask": "goal"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .update_service_level_objective()
            .with_fields(json!({
                "serviceLevelObjective": {
                    "name": "projects/p/services/s/serviceLevelObjectives/slo",
                    "goal": 0.99
                },
                "updateMask": "goal"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .update_service_level_objective()
            .set_service_level_objective(
                model::ServiceLevelObjective::new()
                    .set_name("projects/p/services/s/serviceLevelObjectives/slo")
                    .set_goal(0.99),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["goal"]))
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .update_service_level_objective()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .update_service_level_objective()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }

    #[test]
    fn update_service_level_objective_invalid_fields() {
        // The mock has no expectations, any call to the stub panics.
        let client =
            client::ServiceMonitoringService::from_stub(MockServiceMonitoringService::new());
        let got = client
            .update_service_level_objective()
            .with_fields(json!({"update_mask": "goal"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[tokio::test]
    async fn delete_service_level_objective() -> Result {
        let request = model::DeleteServiceLevelObjectiveRequest::new()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo");
        let response = wkt::Empty::default();

        let mut mock = MockServiceMonitoringService::new();
        let want = request.clone();
        let reply = response.clone();
        let log = OptionsLog::default();
        let record = log.clone();
        mock.expect_delete_service_level_objective()
            .withf(move |req, _| req == &want)
            .times(5)
            .returning(move |_, options| {
                record.lock().expect("options log is not poisoned").push(options);
                ok_response(reply.clone())
            });
        let client = client::ServiceMonitoringService::from_stub(mock);

        let got = client
            .delete_service_level_objective()
            .with_fields(json!({
                "name": "projects/p/services/s/serviceLevelObjectives/slo"
            }))?
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .delete_service_level_objective()
            .with_fields(json!({
                "name": "projects/p/services/s/serviceLevelObjectives/slo"
            }))?
            .with_timeout(TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);

        let mut called = false;
        let got = client
            .delete_service_level_objective()
            .set_name("projects/p/services/s/serviceLevelObjectives/slo")
            .send_with(|body, parts| {
                assert_eq!(body, &response);
                assert_eq!(parts.status_code, Some(200));
                called = true;
            })
            .await?;
        assert_eq!(got, response);
        assert!(called, "the callback runs before the call returns");

        let got = client
            .delete_service_level_objective()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let mut options = gax::options::RequestOptions::default();
        options.set_timeout(TIMEOUT);
        let got = client
            .delete_service_level_objective()
            .with_request(request.clone())
            .with_options(options)
            .send()
            .await?;
        assert_eq!(got, response);

        check_options(&log);
        Ok(())
    }
}
