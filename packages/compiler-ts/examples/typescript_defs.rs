use fluent_typegen_compiler::{compile_source, CompileOptions, ResourceRequest};

fn main() {
    let source = r#"
hello = Hello, { $name }!
apples = I have { $count ->
    [one] one apple
   *[other] { $count } apples
}
shared = { $gender ->
    [male] He shared { $photos ->
        [one] a photo
       *[other] { $photos } photos
    }
   *[other] They shared { $photos } photos
}
demo = Look ma, no arguments!
choices =
    .create = Create
    .open = Open { $path }
"#;

    println!("Compiling Fluent resource to TypeScript definitions...\n");

    let request = match ResourceRequest::parse("./locales/app.ftl?locale=en-US") {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ Invalid request: {}", e);
            std::process::exit(1);
        }
    };

    match compile_source(source, &request, &CompileOptions::default()) {
        Ok(output) => {
            println!("✅ TypeScript Definitions Generated!");
            println!("{}", "=".repeat(80));
            println!("{}", output.declarations);
            println!("{}", "=".repeat(80));
            println!();

            println!("📝 Usage Example:");
            println!("{}", "-".repeat(80));
            println!(
                r#"
import {{ FluentBundle }} from "@fluent/bundle";
import resource, {{ formatMessage, locale }} from "./locales/app.ftl?locale=en-US";

const bundle = new FluentBundle(locale);
bundle.addResource(resource);

formatMessage(bundle, "hello", {{ name: "World" }});
formatMessage(bundle, "apples", {{ count: "one" }});
formatMessage(bundle, "demo", {{}});
formatMessage(bundle, "choices.open", {{ path: "/tmp" }});
"#
            );
            println!("{}", "-".repeat(80));
        }
        Err(e) => {
            eprintln!("❌ Definition compilation error: {}", e);
            std::process::exit(1);
        }
    }
}
