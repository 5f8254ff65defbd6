//! Where test cases come from, and how fetch commands are executed.

use std::sync::Arc;

use testlist_view::{Cmd, LoadError, Msg, TestDescriptor};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiError, TestCaseClient};
use crate::config::AdminConfig;
use crate::demo;

/// Source of the test case collection.
#[derive(Clone)]
pub enum TestSource {
    /// `GET testcase` on the admin server.
    Remote(Arc<TestCaseClient>),
    /// Built-in demo data.
    Demo,
}

impl TestSource {
    pub fn from_config(config: &AdminConfig) -> Result<Self, ApiError> {
        if config.demo {
            Ok(TestSource::Demo)
        } else {
            Ok(TestSource::Remote(Arc::new(TestCaseClient::new(config)?)))
        }
    }

    pub async fn fetch(&self) -> Result<Vec<TestDescriptor>, LoadError> {
        match self {
            TestSource::Remote(client) => client.get_tests().await.map_err(LoadError::from),
            TestSource::Demo => Ok(demo::demo_tests()),
        }
    }

    /// Run a command. Fetches are spawned and answer on `tx`.
    ///
    /// Returns `false` once the command asks the loop to stop.
    pub fn execute(&self, cmd: Cmd, tx: &mpsc::Sender<Msg>) -> bool {
        match cmd {
            Cmd::None => true,
            Cmd::Quit => false,
            Cmd::FetchTests => {
                debug!("Spawning test case fetch");
                let source = self.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = source.fetch().await;
                    if tx.send(Msg::Loaded(result)).await.is_err() {
                        warn!("View dropped before fetch completed");
                    }
                });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_fetch_answers_on_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let source = TestSource::Demo;

        assert!(source.execute(Cmd::FetchTests, &tx));

        match rx.recv().await {
            Some(Msg::Loaded(Ok(tests))) => assert_eq!(tests, demo::demo_tests()),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_quit_stops_loop() {
        let (tx, _rx) = mpsc::channel(1);
        assert!(!TestSource::Demo.execute(Cmd::Quit, &tx));
        assert!(TestSource::Demo.execute(Cmd::None, &tx));
    }

    #[test]
    fn test_from_config_demo() {
        let config = AdminConfig {
            demo: true,
            ..AdminConfig::default()
        };
        assert!(matches!(TestSource::from_config(&config), Ok(TestSource::Demo)));
    }
}
