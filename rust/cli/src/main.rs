fn main() {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = lotto_cli::run(std::env::args(), &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code);
}
