//! Scripted hypervisor fake.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::ToolError;
use crate::port::outbound::hypervisor::Hypervisor;

const PROGRAM: &str = "limactl";

/// Render a one-instance listing line.
pub fn listing(instance: &str, status: &str) -> String {
    format!("{instance}\t{status}\n")
}

#[derive(Debug, Clone)]
enum Step {
    Listing(String),
    Failure(String),
}

impl Step {
    fn play(&self) -> Result<String, ToolError> {
        match self {
            Self::Listing(text) => Ok(text.clone()),
            Self::Failure(output) => Err(failure(output)),
        }
    }
}

fn failure(output: &str) -> ToolError {
    ToolError::Failed {
        program: PROGRAM.to_string(),
        status: Some(1),
        output: output.to_string(),
    }
}

/// Hypervisor that answers listing queries from a script.
///
/// Each `list_instances` call consumes the next scripted step. Once the script
/// is exhausted the last step repeats; with no steps at all the listing is
/// empty.
#[derive(Debug, Default)]
pub struct ScriptedHypervisor {
    script: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    start_failure: Option<String>,
    list_calls: Mutex<usize>,
    starts: Mutex<Vec<String>>,
}

impl ScriptedHypervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful listing.
    #[must_use]
    pub fn then_listing(self, text: impl Into<String>) -> Self {
        self.script.lock().push_back(Step::Listing(text.into()));
        self
    }

    /// Queue `count` identical listings.
    #[must_use]
    pub fn then_listings(self, text: &str, count: usize) -> Self {
        {
            let mut script = self.script.lock();
            for _ in 0..count {
                script.push_back(Step::Listing(text.to_string()));
            }
        }
        self
    }

    /// Queue a listing query that fails outright.
    #[must_use]
    pub fn then_query_failure(self, output: impl Into<String>) -> Self {
        self.script.lock().push_back(Step::Failure(output.into()));
        self
    }

    /// Make every `start_instance` call fail with `output`.
    #[must_use]
    pub fn with_start_failure(mut self, output: impl Into<String>) -> Self {
        self.start_failure = Some(output.into());
        self
    }

    /// Number of listing queries served so far.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock()
    }

    /// Instances passed to `start_instance`, in call order.
    pub fn start_calls(&self) -> Vec<String> {
        self.starts.lock().clone()
    }
}

#[async_trait]
impl Hypervisor for ScriptedHypervisor {
    async fn list_instances(&self) -> Result<String, ToolError> {
        *self.list_calls.lock() += 1;

        let next = self.script.lock().pop_front();
        let mut last = self.last.lock();
        if let Some(step) = next {
            *last = Some(step);
        }
        match last.as_ref() {
            Some(step) => step.play(),
            None => Ok(String::new()),
        }
    }

    async fn start_instance(&self, instance: &str) -> Result<(), ToolError> {
        self.starts.lock().push(instance.to_string());
        match &self.start_failure {
            Some(output) => Err(failure(output)),
            None => Ok(()),
        }
    }

    fn hypervisor_name(&self) -> &'static str {
        "scripted"
    }
}
