use lib_emitter_cli::init;

fn main() {
    if let Err(e) = init() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
