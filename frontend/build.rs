use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=EXPLORER_API_URL");

  // no .env is fine, the page origin is used then
  let _ = dotenv();

  if let Ok(url) = std::env::var("EXPLORER_API_URL") {
    println!("cargo::rustc-env=EXPLORER_API_URL={}", url);
  }
}
