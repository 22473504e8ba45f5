use crate::core::types::{DeviceId, ExecResult, RedirectResult, TimedResult, Timeout};
use crate::device::DeviceSelector;
use crate::error::{AdbxError, Result};
use crate::process::{prepare, Executor};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted stand-in for the process executor.
///
/// Responses are keyed by the space-joined argv (after empty tokens are
/// dropped). Several responses for the same command are replayed in order,
/// the last one sticking.
pub struct MockExecutor {
    responses: Mutex<HashMap<String, VecDeque<ExecResult>>>,
    timed_responses: HashMap<String, TimedResult>,
    file_responses: HashMap<String, (i32, String, String)>,
    default_response: ExecResult,
    calls: Mutex<Vec<Vec<String>>>,
    timeouts: Mutex<Vec<Timeout>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            timed_responses: HashMap::new(),
            file_responses: HashMap::new(),
            default_response: ExecResult::new(0, ""),
            calls: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, cmdline: &str, status: i32, output: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(cmdline.to_string())
            .or_default()
            .push_back(ExecResult::new(status, output));
        self
    }

    pub fn with_timed_response(mut self, cmdline: &str, result: TimedResult) -> Self {
        self.timed_responses.insert(cmdline.to_string(), result);
        self
    }

    pub fn with_file_response(mut self, cmdline: &str, status: i32, stdout: &str, stderr: &str) -> Self {
        self.file_responses.insert(
            cmdline.to_string(),
            (status, stdout.to_string(), stderr.to_string()),
        );
        self
    }

    pub fn with_default(mut self, status: i32, output: &str) -> Self {
        self.default_response = ExecResult::new(status, output);
        self
    }

    /// Every argv seen so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|argv| argv.join(" ")).collect()
    }

    pub fn timeouts(&self) -> Vec<Timeout> {
        self.timeouts.lock().unwrap().clone()
    }

    fn record(&self, argv: &[String]) -> Result<String> {
        let argv = prepare(argv)?;
        let key = argv.join(" ");
        self.calls.lock().unwrap().push(argv);
        Ok(key)
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn run(&self, argv: &[String]) -> Result<ExecResult> {
        let key = self.record(argv)?;
        let mut responses = self.responses.lock().unwrap();
        let result = match responses.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(result.unwrap_or_else(|| self.default_response.clone()))
    }

    async fn run_with_timeout(&self, argv: &[String], timeout: Timeout) -> Result<TimedResult> {
        let key = self.record(argv)?;
        self.timeouts.lock().unwrap().push(timeout);
        Ok(self.timed_responses.get(&key).cloned().unwrap_or(TimedResult {
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
            timed_out: false,
        }))
    }

    async fn run_to_file(&self, argv: &[String], mut file: File) -> Result<RedirectResult> {
        let key = self.record(argv)?;
        let (status, stdout, stderr) = self
            .file_responses
            .get(&key)
            .cloned()
            .unwrap_or((0, String::new(), String::new()));

        file.write_all(stdout.as_bytes())?;
        if status == 0 {
            Ok(RedirectResult::Written { status })
        } else {
            Ok(RedirectResult::Failed {
                status,
                stderr,
                file,
            })
        }
    }
}

/// Selector with a canned answer that counts how often it was consulted
pub struct ScriptedSelector {
    answer: Option<String>,
    presented: AtomicUsize,
    reads: AtomicUsize,
    choices: Mutex<Vec<DeviceId>>,
}

impl ScriptedSelector {
    /// Answers `answer` when asked
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            presented: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            choices: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a closed stdin
    pub fn aborting() -> Self {
        Self {
            answer: None,
            presented: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            choices: Mutex::new(Vec::new()),
        }
    }

    pub fn times_presented(&self) -> usize {
        self.presented.load(Ordering::SeqCst)
    }

    pub fn times_read(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn last_choices(&self) -> Vec<DeviceId> {
        self.choices.lock().unwrap().clone()
    }
}

impl DeviceSelector for ScriptedSelector {
    fn present_choices(&self, devices: &[DeviceId]) -> Result<()> {
        self.presented.fetch_add(1, Ordering::SeqCst);
        *self.choices.lock().unwrap() = devices.to_vec();
        Ok(())
    }

    fn read_selection(&self) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().ok_or(AdbxError::SelectionAborted)
    }
}
