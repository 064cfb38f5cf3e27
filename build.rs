fn main() {
    // Capture the build timestamp; the footer shows it via env!("BUILD_TIME")
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
}
