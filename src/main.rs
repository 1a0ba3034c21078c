use std::panic;
use std::process;

use gossh::cli::entrypoint::run;

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = payload
            .downcast_ref::<&str>()
            .is_some_and(|s| s.contains("Broken pipe"))
            || payload
                .downcast_ref::<String>()
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() {
    install_broken_pipe_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    process::exit(run(&args));
}
