use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: wastgen <dest-dir> <descriptor.json>...");
        process::exit(1);
    }

    let dest_dir = Path::new(&args[0]);
    if let Err(e) = fs::create_dir_all(dest_dir) {
        eprintln!("{}: {}", dest_dir.display(), e);
        process::exit(1);
    }

    for input in &args[1..] {
        match wastgen::gen::process_file(Path::new(input), dest_dir) {
            Ok(path) => println!("{} -> {}", input, path.display()),
            Err(e) => {
                eprintln!("{}: {}", input, e);
                process::exit(1);
            }
        }
    }
}
