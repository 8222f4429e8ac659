//! Per-invocation state shared by every command.

use std::sync::Arc;

use log::{Level, LevelFilter};
use thumbtack_core::logging::{self, Logger};
use thumbtack_core::{Client, ClientConfig, Registry};

use crate::prelude::*;
use crate::transport::ReqwestTransport;
use crate::{Global, APP_NAME};

/// Build the process logger. The same instance is handed to the client.
pub fn build_logger(level: LevelFilter) -> Logger {
    let logger = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .build();
    Arc::new(logger)
}

pub struct Context {
    config: ClientConfig,
    logger: Logger,
    pub json: bool,
}

impl Context {
    pub fn new(global: &Global, logger: Logger) -> Self {
        let mut registry = Registry::new();
        registry.set_version(env!("CARGO_PKG_VERSION"));

        let config = ClientConfig {
            token: global.token.clone(),
            endpoint: global.endpoint.clone(),
            user_agent: global.useragent.clone(),
            registry,
            logger: Some(logger.clone()),
        };
        Self {
            config,
            logger,
            json: global.json,
        }
    }

    /// Build a client and run one API call, logging any failure under `cmd`.
    pub fn call<R>(
        &self,
        cmd: &str,
        op: impl FnOnce(&Client<ReqwestTransport>) -> Result<R, thumbtack_core::Error>,
    ) -> Result<R> {
        logging::emit(
            self.logger.as_ref(),
            Level::Debug,
            format_args!("cmd=\"{cmd}\" app_name={APP_NAME} msg=\"running command\""),
        );

        let transport = ReqwestTransport::new().inspect_err(|err| self.fail(cmd, err))?;
        Client::new(self.config.clone(), transport)
            .and_then(|client| op(&client))
            .map_err(|err| {
                self.fail(cmd, &err);
                eyre!(err).wrap_err(f!("{cmd} failed"))
            })
    }

    fn fail(&self, cmd: &str, err: &dyn std::fmt::Display) {
        logging::emit(
            self.logger.as_ref(),
            Level::Error,
            format_args!("cmd=\"{cmd}\" app_name={APP_NAME} error=\"{err}\" msg=\"command failed\""),
        );
    }
}
