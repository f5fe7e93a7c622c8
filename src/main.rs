fn main() {
    if let Err(err) = floatip::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
