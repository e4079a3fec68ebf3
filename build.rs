use std::env;
use std::fs;
use std::path::Path;

// Expone las variables de .env como env de compilación para que
// config.rs pueda leerlas con option_env!.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay archivo .env; se usan las URLs por defecto (ver .env.example)");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            // Una variable ya definida en el entorno tiene prioridad
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
