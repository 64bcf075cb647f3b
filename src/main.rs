use capture_chess::console::console_top::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("console error: {err}");
        std::process::exit(1);
    }
}
