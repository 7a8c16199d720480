use std::path::PathBuf;
use std::{env, fs};

const CONFIG_FILE_NAME: &str = "skillkeeper.toml";

// Places `skillkeeper.<profile>.toml` beside the binary as `skillkeeper.toml`.
fn main() {
    let profile = env::var("PROFILE").expect("cargo sets PROFILE for build scripts");
    let profile_config = format!("skillkeeper.{profile}.toml");
    println!("cargo:rerun-if-changed={profile_config}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));
    // OUT_DIR is <target>/<profile>/build/<package>-<hash>/out
    let Some(binary_dir) = out_dir.ancestors().nth(3) else {
        panic!("unexpected OUT_DIR layout: {}", out_dir.display());
    };

    if let Err(e) = fs::create_dir_all(binary_dir)
        .and_then(|_| fs::copy(&profile_config, binary_dir.join(CONFIG_FILE_NAME)))
    {
        panic!("could not install {profile_config} as {CONFIG_FILE_NAME}: {e}");
    }
}
