use giturl::GitUrl;
fn escape(s: &str) -> String {
    s.replace("\t", "\\t")
        .replace("\n", "\\n")
        .replace("\r", "\\r")
}
fn main() {
    env_logger::init();
    // read stdin to completion
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).unwrap();
    let input = input.trim_end_matches(&['\r', '\n']);
    let result = GitUrl::new(input);
    match result {
        Ok(url) => {
            let input = escape(input);
            let protocol = url.protocol();
            let port = url.port();
            let user = escape(url.user());
            let host = escape(url.host());
            let path = escape(url.path());
            let repo = escape(url.repo());
            let err = "";
            println!("{input}\t{protocol}\t{port}\t{user}\t{host}\t{path}\t{repo}\t{err}");
            std::process::exit(0);
        }
        Err(e) => {
            let input = escape(input);
            let protocol = "";
            let port = "";
            let user = "";
            let host = "";
            let path = "";
            let repo = "";
            let err = format!("{:?} @ {}", e.kind(), e.index());
            println!("{input}\t{protocol}\t{port}\t{user}\t{host}\t{path}\t{repo}\t{err}");
            std::process::exit(1);
        }
    }
}
