//! Print a git url in every supported form, keeping its user and dropping
//! explicit ports.
//!
//! ```sh
//! cargo run --example convert -- git@gitlab.com:charlie/wto/bomb.git
//! ```
use giturl::{GitUrl, IMPLICIT_PORT};

fn main() {
    env_logger::init();
    let mut failed = false;
    for arg in std::env::args().skip(1) {
        let url = match GitUrl::new(&arg) {
            Ok(url) => url,
            Err(e) => {
                eprintln!("{arg}: {e}");
                failed = true;
                continue;
            }
        };
        println!("{arg} ({}, port {})", url.protocol(), url.port());
        println!("  ssh   {}", url.to_ssh_format(url.user(), IMPLICIT_PORT, true));
        println!("  git   {}", url.to_git_format(IMPLICIT_PORT, true));
        println!("  http  {}", url.to_http_format(IMPLICIT_PORT, false, true));
        println!("  https {}", url.to_http_format(IMPLICIT_PORT, true, true));
        println!("  ftp   {}", url.to_ftp_format(IMPLICIT_PORT, false, true));
        println!("  ftps  {}", url.to_ftp_format(IMPLICIT_PORT, true, true));
        println!("  scp   {}", url.to_scp_format(url.user(), true));
    }
    if failed {
        std::process::exit(1);
    }
}
