use vetted::{is, prelude::*, Bound, Check, Program, Raw, Value};

fn main() -> Result<(), vetted::DeclarationError> {
    Program::new("greeter")
        .description("Greet someone, possibly many times.")?
        .option(
            "-t, --times",
            "How many greetings.",
            is().optional()
                .integer()
                .between(1, 10, Bound::Included)
                .otherwise(1),
        )?
        .option(
            "-l, --language",
            "The greeting language.",
            is().optional().list(["en", "fr", "de"]).otherwise("en"),
        )?
        .option("-s, --shout", "Greet in upper case.", is().optional().boolean())?
        .option(
            "--punctuation",
            "The closing punctuation.",
            Check::custom(|raw| match raw {
                None => Ok(Value::from(".")),
                Some(Raw::Text(text)) if text.chars().count() == 1 => Ok(Value::from(text.as_str())),
                Some(raw) => Err(format!("'{raw}' must be a single character.")),
            }),
        )?
        .value(
            "name",
            "Who to greet.",
            is().mandatory().string().longer_than(0, Bound::Excluded),
        )?
        .action(|payload| {
            let times = payload
                .option("times")
                .and_then(Value::as_f64)
                .unwrap_or(1.0) as usize;
            let greeting = match payload.option("language").and_then(Value::as_str) {
                Some("fr") => "Bonjour",
                Some("de") => "Hallo",
                _ => "Hello",
            };
            let punctuation = payload
                .option("punctuation")
                .map(Value::to_string)
                .unwrap_or_default();
            let name = payload.value("name").map(Value::to_string).unwrap_or_default();
            let mut message = format!("{greeting}, {name}{punctuation}");

            if payload.option("shout").and_then(Value::as_bool) == Some(true) {
                message = message.to_uppercase();
            }

            for _ in 0..times {
                println!("{message}");
            }
        })
        .parse();

    Ok(())
}
