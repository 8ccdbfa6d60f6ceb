use anyhow::{Context, Result, bail};
use clap::Parser as _;
use log::info;
use strcomb::{
    MapExt, ParseResult, Parser, SequenceExt, VariableAssignment, int_array, integer, key_value,
    letters, literal, many, map, one_of, separated_by, sequence, skip_left, skip_right,
    variable_assignment, whitespace,
};

/// Parse `let <name> = [<int>, ...]` assignments
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Args {
    /// Assignments to parse, e.g. "let xs = [1, 2, 3]"
    inputs: Vec<String>,

    /// Walk through every primitive and combinator on sample inputs
    #[arg(long)]
    showcase: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.showcase {
        showcase();
    }

    let mut failures = 0;
    for input in &args.inputs {
        match parse_assignment(input) {
            Ok(assignment) => println!("{}", assignment),
            Err(error) => {
                eprintln!("error: {:#}", error);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} inputs failed to parse", failures, args.inputs.len());
    }
    Ok(())
}

fn parse_assignment(input: &str) -> Result<VariableAssignment> {
    let assignment = input
        .parse::<VariableAssignment>()
        .with_context(|| format!("invalid assignment {:?}", input))?;
    info!("parsed {} with {} values", assignment.name, assignment.values.len());
    Ok(assignment)
}

fn show<T: std::fmt::Debug>(label: &str, result: ParseResult<'_, T>) {
    println!("  {:<24} {:?}", label, result);
}

fn showcase() {
    println!("1. Literal");
    show("\"*  jan\"", literal("*  ").apply("*  jan"));
    show("\"jan\"", literal("*  ").apply("jan"));

    println!("2. Integer");
    show("\"1234jan\"", integer().apply("1234jan"));
    show("\"jan\"", integer().apply("jan"));

    println!("3. Whitespace");
    show("\"   jan\"", whitespace().apply("   jan"));
    show("\"jan\"", whitespace().apply("jan"));

    println!("4. Sequence");
    let signed = sequence(literal("-"), integer());
    show("\"-123jan\"", signed.apply("-123jan"));
    show("\"123jan\"", signed.apply("123jan"));

    println!("5. One of");
    let a_or_b = one_of(literal("a"), literal("b"));
    show("\"ab\"", a_or_b.apply("ab"));
    show("\"bc\"", a_or_b.apply("bc"));
    show("\"cd\"", a_or_b.apply("cd"));

    println!("6. Map");
    let even = map(integer(), |n| n % 2 == 0);
    show("\"11\"", even.apply("11"));
    show("\"12\"", even.apply("12"));

    println!("7. Skip left");
    show("\"1a\"", skip_left(integer(), literal("a")).apply("1a"));

    println!("8. Skip right");
    show("\"a1\"", skip_right(literal("a"), integer()).apply("a1"));

    println!("9. Many");
    let many_a = many(literal("a"));
    show("\"aaa\"", many_a.apply("aaa"));
    show("\"aaab\"", many_a.apply("aaab"));

    println!("10. Separated by");
    let list = separated_by(integer(), literal(","));
    show("\"1,2,3\"", list.apply("1,2,3"));
    show("\"1,2\"", list.apply("1,2"));
    show("\"a\"", list.apply("a"));

    println!("11. Variable assignment");
    show(
        "\"let  ab = [1, 2, 3,  4]\"",
        variable_assignment().apply("let  ab = [1, 2, 3,  4]"),
    );

    println!("12. Integer array");
    show("\"[1, 2, 3]\"", int_array().apply("[1, 2, 3]"));

    println!("13. Key-value");
    show("\"firstName:Jan\"", key_value().apply("firstName:Jan"));

    println!("14. Method syntax");
    let pair = letters().then(literal("=")).then(integer()).map(|((k, _), v)| (k, v));
    show("\"width=80\"", pair.apply("width=80"));

    println!();
}
