use std::process::Command;

fn main() {
  // Embedded into `--version`. Missing git or a missing repository leaves the
  // variables unset.
  if let Some(hash) = git(&["rev-parse", "--short", "HEAD"]) {
    println!("cargo:rustc-env=GIT_HASH={hash}");
  }
  if let Some(date) = git(&["log", "-1", "--format=%cs"]) {
    println!("cargo:rustc-env=GIT_DATE={date}");
  }

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
  (!value.is_empty()).then_some(value)
}
