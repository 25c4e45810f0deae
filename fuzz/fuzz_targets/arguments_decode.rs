use honggfuzz::fuzz;
use staticgzip::{resolve_source, resolve_target, StageArguments};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(args) = StageArguments::from_slice(data) {
                let _ = resolve_source(&args);
                let _ = resolve_target(&args);
            }
        });
    }
}
