use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CliRunner {
    mode: RunMode,
}

#[derive(Debug, Clone)]
enum RunMode {
    Binary(PathBuf),
    Library,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        if let Some(p) = option_env!("CARGO_BIN_EXE_lotto") {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self { mode: RunMode::Binary(pb) };
            }
        }
        Self { mode: RunMode::Library }
    }

    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], "")
    }

    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], input)
    }

    /// Environment overrides only apply when running the binary.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, "")
    }

    #[allow(dead_code)]
    pub fn is_binary(&self) -> bool {
        matches!(self.mode, RunMode::Binary(_))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        match &self.mode {
            RunMode::Binary(bin) => {
                let mut cmd = Command::new(bin);
                cmd.args(args)
                    .stdin(Stdio::piped())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .env_remove("LOTTO_CONFIG")
                    .env_remove("LOTTO_LOG")
                    .env_remove("LOTTO_BANNER");
                for (k, v) in env.iter() {
                    cmd.env(k, v);
                }

                let mut child = cmd.spawn().expect("failed to spawn CLI binary");
                if let Some(mut stdin) = child.stdin.take() {
                    use std::io::Write as _;
                    let _ = stdin.write_all(input.as_bytes());
                }
                let output = child.wait_with_output().expect("failed to read output");
                CliResult {
                    exit_code: output.status.code().unwrap_or(1),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
            RunMode::Library => {
                let mut out: Vec<u8> = Vec::new();
                let mut err: Vec<u8> = Vec::new();
                let mut reader = input.as_bytes();
                // Prepend program name for clap compatibility
                let argv: Vec<String> = std::iter::once("lotto".to_string())
                    .chain(args.iter().map(|s| s.to_string()))
                    .collect();
                let code = lotto_cli::run_with_input(argv, &mut reader, &mut out, &mut err);
                CliResult {
                    exit_code: code,
                    stdout: String::from_utf8_lossy(&out).to_string(),
                    stderr: String::from_utf8_lossy(&err).to_string(),
                }
            }
        }
    }
}
