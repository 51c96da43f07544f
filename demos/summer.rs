use vetted::{is, prelude::*, Bound, Program};

fn main() {
    let mut sum = 0.0;

    let program = Program::new("summer")
        .version("0.1.0")
        .and_then(|p| p.description("Sum two numbers."))
        .and_then(|p| {
            p.option(
                "-s, --scale",
                "Multiply the sum by this factor.",
                is().optional()
                    .float()
                    .greater_than(0, Bound::Excluded)
                    .otherwise(1),
            )
        })
        .and_then(|p| p.value("left", "The left operand.", is().mandatory().float()))
        .and_then(|p| {
            p.value(
                "right",
                "The right operand.",
                is().optional().float().otherwise(0),
            )
        });

    match program {
        Ok(program) => program
            .action(|payload| {
                let number = |value: Option<&vetted::Value>| {
                    value.and_then(vetted::Value::as_f64).unwrap_or_default()
                };
                sum = (number(payload.value("left")) + number(payload.value("right")))
                    * number(payload.option("scale"));
            })
            .parse(),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }

    println!("Sum: {sum}");
}
