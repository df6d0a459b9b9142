fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site settings are baked in with option_env!, so a change must rebuild
    for var in [
        "PORTFOLIO_EMAILJS_API_URL",
        "PORTFOLIO_EMAILJS_SERVICE_ID",
        "PORTFOLIO_EMAILJS_TEMPLATE_ID",
        "PORTFOLIO_EMAILJS_PUBLIC_KEY",
        "PORTFOLIO_ADMIN_PASSWORD",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
