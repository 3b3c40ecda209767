fn main() {
    match lintsum::cli::run() {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            lintsum::ui::eprintln_error(&err);
            std::process::exit(lintsum::exit::exit_code(&err));
        }
    }
}
