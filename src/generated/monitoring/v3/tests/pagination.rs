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

//! Verify the paginators request each page in turn.

#[cfg(test)]
mod tests {
    use google_cloud_monitoring_v3::{client, model, stub};
    use mockall::Sequence;

    type Result = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        ServiceMonitoringService {}
        impl stub::ServiceMonitoringService for ServiceMonitoringService {
            async fn list_services(
                &self,
                req: model::ListServicesRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListServicesResponse>>;
            async fn list_service_level_objectives(
                &self,
                req: model::ListServiceLevelObjectivesRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListServiceLevelObjectivesResponse>>;
        }
    }

    fn page(
        names: &[&str],
        next: &str,
    ) -> gax::Result<gax::response::Response<model::ListServicesResponse>> {
        let response = model::ListServicesResponse::new()
            .set_services(names.iter().map(|n| model::Service::new().set_name(*n)))
            .set_next_page_token(next);
        Ok(gax::response::Response::from(response))
    }

    fn mock_pages() -> MockServiceMonitoringService {
        let mut seq = Sequence::new();
        let mut mock = MockServiceMonitoringService::new();
        mock.expect_list_services()
            .withf(|req, _| req.parent == "projects/p" && req.page_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| page(&["a", "b"], "token-1"));
        mock.expect_list_services()
            .withf(|req, _| req.parent == "projects/p" && req.page_token == "token-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| page(&[], "token-2"));
        mock.expect_list_services()
            .withf(|req, _| req.parent == "projects/p" && req.page_token == "token-2")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| page(&["c"], ""));
        mock
    }

    #[tokio::test]
    async fn by_page() -> Result {
        let client = client::ServiceMonitoringService::from_stub(mock_pages());
        let mut pages = client.list_services().set_parent("projects/p").by_page();
        let mut tokens = Vec::new();
        while let Some(page) = pages.next().await {
            tokens.push(page?.next_page_token);
        }
        assert_eq!(tokens, vec!["token-1", "token-2", ""]);
        Ok(())
    }

    #[tokio::test]
    async fn by_page_resumes_from_token() -> Result {
        let mut seq = Sequence::new();
        let mut mock = MockServiceMonitoringService::new();
        mock.expect_list_service_level_objectives()
            .withf(|req, _| req.parent == "projects/p/services/s" && req.page_token == "resume")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                let response = model::ListServiceLevelObjectivesResponse::new()
                    .set_service_level_objectives([model::ServiceLevelObjective::new()
                        .set_name("projects/p/services/s/serviceLevelObjectives/a")])
                    .set_next_page_token("last");
                Ok(gax::response::Response::from(response))
            });
        mock.expect_list_service_level_objectives()
            .withf(|req, _| req.page_token == "last")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                let response = model::ListServiceLevelObjectivesResponse::new();
                Ok(gax::response::Response::from(response))
            });
        let client = client::ServiceMonitoringService::from_stub(mock);
        let mut pages = client
            .list_service_level_objectives()
            .set_parent("projects/p/services/s")
            .set_page_token("resume")
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.service_level_objectives.len());
        }
        assert_eq!(sizes, vec![1, 0]);
        Ok(())
    }

    #[tokio::test]
    async fn by_item() -> Result {
        let client = client::ServiceMonitoringService::from_stub(mock_pages());
        let mut items = client.list_services().set_parent("projects/p").by_item();
        let mut names = Vec::new();
        while let Some(service) = items.next().await {
            names.push(service?.name);
        }
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn by_item_stops_on_error() -> Result {
        let mut mock = MockServiceMonitoringService::new();
        mock.expect_list_services()
            .times(1)
            .returning(|_, _| page(&["a"], "token-1"));
        mock.expect_list_services()
            .times(1)
            .returning(|_, _| {
                let status = gax::error::rpc::Status::default()
                    .set_code(gax::error::rpc::Code::Unavailable)
                    .set_message("try again");
                Err(gax::error::Error::service(status))
            });
        let client = client::ServiceMonitoringService::from_stub(mock);
        let mut items = client.list_services().set_parent("projects/p").by_item();
        let first = items.next().await;
        assert!(matches!(first, Some(Ok(ref s)) if s.name == "a"), "{first:?}");
        let second = items.next().await;
        assert!(matches!(second, Some(Err(_))), "{second:?}");
        Ok(())
    }
}
