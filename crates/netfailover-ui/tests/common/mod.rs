//! Common test utilities for console integration tests

use async_trait::async_trait;
use netfailover_core::{
    DefaultGwResponse, Error, FailoverBackend, InterfaceStatusEntry, InterfaceStatusResponse,
    Result,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One scripted backend reply: wait `delay`, then answer with `value`, or
/// with status 500 when `value` is `None`
struct Step<T> {
    delay: Duration,
    value: Option<T>,
}

/// In-memory backend that replays scripted replies with controlled delays
///
/// An endpoint with no scripted reply left answers 503 immediately.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedBackend {
    gateway: Mutex<VecDeque<Step<DefaultGwResponse>>>,
    overrides: Mutex<VecDeque<Step<DefaultGwResponse>>>,
    interfaces: Mutex<VecDeque<Step<InterfaceStatusResponse>>>,
    set_requests: Mutex<Vec<String>>,
    gateway_calls: AtomicUsize,
    interface_calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_gateway(&self, delay_ms: u64, default_gw: Option<&str>) {
        self.gateway.lock().unwrap().push_back(Step {
            delay: Duration::from_millis(delay_ms),
            value: default_gw.map(|gw| DefaultGwResponse {
                default_gw: gw.to_string(),
            }),
        });
    }

    pub fn push_override(&self, delay_ms: u64, default_gw: Option<&str>) {
        self.overrides.lock().unwrap().push_back(Step {
            delay: Duration::from_millis(delay_ms),
            value: default_gw.map(|gw| DefaultGwResponse {
                default_gw: gw.to_string(),
            }),
        });
    }

    pub fn push_interfaces(&self, delay_ms: u64, rows: Option<&[(&str, &str)]>) {
        self.interfaces.lock().unwrap().push_back(Step {
            delay: Duration::from_millis(delay_ms),
            value: rows.map(|rows| InterfaceStatusResponse {
                interface_status: rows
                    .iter()
                    .map(|(name, status)| InterfaceStatusEntry::new(*name, *status))
                    .collect(),
            }),
        });
    }

    /// Interface names passed to `/set_default_gw`, in call order
    pub fn set_requests(&self) -> Vec<String> {
        self.set_requests.lock().unwrap().clone()
    }

    pub fn gateway_calls(&self) -> usize {
        self.gateway_calls.load(Ordering::SeqCst)
    }

    pub fn interface_calls(&self) -> usize {
        self.interface_calls.load(Ordering::SeqCst)
    }
}

async fn play<T>(step: Option<Step<T>>, endpoint: &str) -> Result<T> {
    let Some(step) = step else {
        return Err(Error::Status {
            endpoint: endpoint.to_string(),
            status_code: 503,
        });
    };

    tokio::time::sleep(step.delay).await;
    step.value.ok_or_else(|| Error::Status {
        endpoint: endpoint.to_string(),
        status_code: 500,
    })
}

#[async_trait]
impl FailoverBackend for ScriptedBackend {
    async fn get_default_gw(&self) -> Result<DefaultGwResponse> {
        self.gateway_calls.fetch_add(1, Ordering::SeqCst);
        let step = self.gateway.lock().unwrap().pop_front();
        play(step, "/get_default_gw").await
    }

    async fn set_default_gw(&self, interface: &str) -> Result<DefaultGwResponse> {
        self.set_requests
            .lock()
            .unwrap()
            .push(interface.to_string());
        let step = self.overrides.lock().unwrap().pop_front();
        play(step, "/set_default_gw").await
    }

    async fn get_interface_status(&self) -> Result<InterfaceStatusResponse> {
        self.interface_calls.fetch_add(1, Ordering::SeqCst);
        let step = self.interfaces.lock().unwrap().pop_front();
        play(step, "/get_interface_status").await
    }
}
