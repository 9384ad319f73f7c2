use gqlex_lib::{GRAPHQL, LexerDescriptor};

pub struct InfoArgs {
    pub json: bool,
}

pub fn run(args: InfoArgs) {
    if !args.json {
        print!("{}", format_info(&GRAPHQL));
        return;
    }
    match serde_json::to_string_pretty(&GRAPHQL) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn format_info(descriptor: &LexerDescriptor) -> String {
    format!(
        "{}\n  aliases:   {}\n  filenames: {}\n  mimetypes: {}\n",
        descriptor.name,
        descriptor.aliases.join(", "),
        descriptor.filenames.join(", "),
        descriptor.mimetypes.join(", "),
    )
}
