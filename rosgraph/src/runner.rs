use std::cell::RefCell;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default executable name of the external introspection tool.
pub const DEFAULT_PROGRAM: &str = "ros2";

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Executes the external introspection tool and captures its stdout.
///
/// Implementations never propagate failures: a spawn error, a non-zero
/// exit, or a timeout all collapse to the empty string, which downstream
/// parsers treat as an empty graph.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> String;
}

/// Production runner invoking the `ros2` command-line tool.
pub struct Ros2Cli {
    program: String,
    timeout: Option<Duration>,
}

impl Ros2Cli {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: None,
        }
    }

    /// Points the runner at a different executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Kills the child and gives up once the deadline passes.
    /// Without a timeout the call blocks until the child exits.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Probes whether the external tool can be invoked at all.
    pub fn available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Runs the tool once. `Ok(None)` means the child was killed on the
    /// deadline or exited non-zero.
    fn capture(&self, args: &[&str]) -> std::io::Result<Option<String>> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Drain stdout on its own thread so a chatty child never blocks
        // against a full pipe while we wait for exit.
        let mut stdout = child.stdout.take();
        let reader = std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(out) = stdout.as_mut() {
                let _ = out.read_to_end(&mut buf);
            }
            buf
        });

        let status = match self.timeout.map(|t| Instant::now() + t) {
            None => child.wait()?,
            Some(deadline) => loop {
                match child.try_wait() {
                    Ok(Some(status)) => break status,
                    Ok(None) => {}
                    Err(e) => {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = reader.join();
                        return Err(e);
                    }
                }
                if Instant::now() >= deadline {
                    tracing::warn!("{} {} timed out, killing", self.program, args.join(" "));
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = reader.join();
                    return Ok(None);
                }
                std::thread::sleep(POLL_INTERVAL);
            },
        };

        let buf = reader.join().unwrap_or_default();
        if !status.success() {
            tracing::warn!("{} {} exited with {}", self.program, args.join(" "), status);
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl Default for Ros2Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for Ros2Cli {
    fn run(&self, args: &[&str]) -> String {
        tracing::debug!("Running: {} {}", self.program, args.join(" "));
        match self.capture(args) {
            Ok(Some(output)) => output,
            Ok(None) => String::new(),
            Err(e) => {
                tracing::warn!("Failed to invoke {}: {}", self.program, e);
                String::new()
            }
        }
    }
}

/// Test-double runner that records argument vectors and replays preset
/// outputs in order, falling back to the empty string once exhausted.
pub struct MockCli {
    outputs: RefCell<Vec<String>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockCli {
    pub fn new() -> Self {
        Self {
            outputs: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_outputs(outputs: Vec<&str>) -> Self {
        let mut reversed: Vec<String> = outputs.into_iter().map(Into::into).collect();
        reversed.reverse();
        Self {
            outputs: RefCell::new(reversed),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every argument vector seen so far, space-joined.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.join(" ")).collect()
    }
}

impl Default for MockCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockCli {
    fn run(&self, args: &[&str]) -> String {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|s| s.to_string()).collect());
        self.outputs.borrow_mut().pop().unwrap_or_default()
    }
}
