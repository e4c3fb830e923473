//! Fake command palette

use super::lock;
use seekbug_ports::{
    CommandHandlerRef, CommandRegistry, HostContext, HostError, Result, Subscription,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type HandlerMap = Arc<Mutex<HashMap<String, CommandHandlerRef>>>;

#[derive(Default)]
pub struct FakeCommandRegistry {
    handlers: HandlerMap,
    refused: Mutex<Vec<String>>,
}

impl FakeCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make registration of `command_id` fail
    pub fn refuse(&self, command_id: &str) {
        lock(&self.refused).push(command_id.to_string());
    }

    /// Registered command ids, sorted
    pub fn registered_commands(&self) -> Vec<String> {
        let mut ids: Vec<_> = lock(&self.handlers).keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Invoke a command the way the palette would. Returns `false` when
    /// nothing is registered under `command_id`.
    pub async fn invoke(&self, command_id: &str, host: &HostContext) -> bool {
        let handler = lock(&self.handlers).get(command_id).cloned();
        match handler {
            Some(handler) => {
                handler.execute(host).await;
                true
            }
            None => false,
        }
    }
}

impl CommandRegistry for FakeCommandRegistry {
    fn register_command(
        &self,
        command_id: &str,
        handler: CommandHandlerRef,
    ) -> Result<Subscription> {
        if lock(&self.refused).iter().any(|id| id == command_id) {
            return Err(HostError::Registration(format!(
                "command '{}' refused",
                command_id
            )));
        }

        let mut handlers = lock(&self.handlers);
        if handlers.contains_key(command_id) {
            return Err(HostError::Registration(format!(
                "command '{}' already exists",
                command_id
            )));
        }
        handlers.insert(command_id.to_string(), handler);

        let map = self.handlers.clone();
        let key = command_id.to_string();
        Ok(Subscription::new(format!("command:{}", command_id), move || {
            lock(&map)
                .remove(&key)
                .map(|_| ())
                .ok_or_else(|| HostError::Release(format!("command '{}' not registered", key)))
        }))
    }
}
