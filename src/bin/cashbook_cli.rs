use cashbook::{
    cli::{run_cli, StdioConsole},
    init,
};

fn main() {
    init();

    let mut console = StdioConsole::new();
    if let Err(err) = run_cli(&mut console) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
