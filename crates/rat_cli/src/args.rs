// crates/rat_cli/src/args.rs
//
// Argument surface for the `rat` calculator. clap handles the raw shape;
// `parse_and_validate` turns operand strings into typed values so that every
// malformed operand is reported as a usage error before any arithmetic runs.
//
// Operands use the text form `<n>[/<d>]` over 128-bit signed integers. Values
// starting with '-' are accepted as positionals.

use clap::{ArgAction, Parser, Subcommand};
use rat_core::{Rational, RationalError};

/// Base type used by every command.
pub type Value = Rational<i128>;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "rat",
    version,
    disable_help_subcommand = true,
    about = "Exact rational arithmetic over 128-bit integers"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential stderr logs.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the canonical form of a rational.
    Canon {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the exact fraction a floating-point literal denotes.
    Float {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Round the literal to single precision first.
        #[arg(long)]
        single: bool,
    },
    /// Apply one of + - * / to two rationals.
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Also print the nearest f64.
        #[arg(long)]
        decimal: bool,
    },
    /// Compare two rationals; prints <, = or >.
    Cmp {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Raise a rational to an integer power.
    Pow {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        exp: String,
    },
}

/// Binary operators accepted by `eval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

/// Validated work item.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Canon(Value),
    FloatF64(f64),
    FloatF32(f32),
    Eval { lhs: Value, op: Op, rhs: Value, decimal: bool },
    Cmp(Value, Value),
    Pow(Value, i32),
}

/// Errors surfaced by operand validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    BadRational { input: String, source: RationalError },
    BadFloat(String),
    BadOp(String),
    BadExponent(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            BadRational { input, source } => write!(f, "invalid rational '{input}': {source}"),
            BadFloat(s) => write!(f, "invalid float literal: {s}"),
            BadOp(s) => write!(f, "unknown operator '{s}' (expected one of + - * /)"),
            BadExponent(s) => write!(f, "exponent must be a 32-bit integer: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Operand parser. Trailing text after the last integer is not accepted here,
/// even though the library reader tolerates it. Parts outside `i128` (and a
/// `MIN` denominator that cannot be made positive) are `NotRepresentable`.
pub fn parse_value(s: &str) -> Result<Value, CliError> {
    let bad = |source| CliError::BadRational { input: s.to_string(), source };
    let t = s.trim();
    let well_formed = !t.is_empty()
        && t.split_once('/').map_or(is_integer_text(t), |(n, d)| {
            is_integer_text(n.trim()) && is_integer_text(d.trim())
        });
    if !well_formed {
        return Err(bad(RationalError::Malformed("expected <numerator>[/<denominator>]")));
    }
    t.parse::<Value>().map_err(bad)
}

#[inline]
fn is_integer_text(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_op(s: &str) -> Result<Op, CliError> {
    match s.trim() {
        "+" | "add" => Ok(Op::Add),
        "-" | "sub" => Ok(Op::Sub),
        "*" | "x" | "mul" => Ok(Op::Mul),
        "/" | "div" => Ok(Op::Div),
        other => Err(CliError::BadOp(other.to_string())),
    }
}

fn parse_exponent(s: &str) -> Result<i32, CliError> {
    s.trim().parse::<i32>().map_err(|_| CliError::BadExponent(s.to_string()))
}

fn parse_float(s: &str, single: bool) -> Result<Request, CliError> {
    let t = s.trim();
    let bad = || CliError::BadFloat(s.to_string());
    if single {
        t.parse::<f32>().map(Request::FloatF32).map_err(|_| bad())
    } else {
        t.parse::<f64>().map(Request::FloatF64).map_err(|_| bad())
    }
}

/// Parse from the process arguments and validate operands.
/// clap exits with status 2 on its own for shape errors.
pub fn parse_and_validate() -> Result<(Args, Request), CliError> {
    let args = Args::parse();
    let req = validate(&args.command)?;
    Ok((args, req))
}

pub fn validate(cmd: &Command) -> Result<Request, CliError> {
    Ok(match cmd {
        Command::Canon { value } => Request::Canon(parse_value(value)?),
        Command::Float { value, single } => parse_float(value, *single)?,
        Command::Eval { lhs, op, rhs, decimal } => Request::Eval {
            lhs: parse_value(lhs)?,
            op: parse_op(op)?,
            rhs: parse_value(rhs)?,
            decimal: *decimal,
        },
        Command::Cmp { lhs, rhs } => Request::Cmp(parse_value(lhs)?, parse_value(rhs)?),
        Command::Pow { value, exp } => Request::Pow(parse_value(value)?, parse_exponent(exp)?),
    })
}

/* ---- Tests ---- */
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn v(n: i128, d: i128) -> Value {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn value_parser_accepts_plain_forms() {
        assert_eq!(parse_value("6/8").unwrap(), v(3, 4));
        assert_eq!(parse_value(" -6 / 8 ").unwrap(), v(-3, 4));
        assert_eq!(parse_value("5").unwrap(), v(5, 1));
        assert_eq!(parse_value("+1/-2").unwrap(), v(-1, 2));
    }

    #[test]
    fn value_parser_is_strict() {
        for s in ["", "/", "1/", "x/2", "7 apples", "1/2/3", "1.5"] {
            assert!(parse_value(s).is_err(), "{s:?}");
        }
        assert!(matches!(
            parse_value("1/0"),
            Err(CliError::BadRational { source: RationalError::ZeroDenominator, .. })
        ));
    }

    #[test]
    fn value_parser_rejects_parts_outside_i128() {
        let huge = "1000000000000000000000000000000000000000000";
        for s in [format!("1/{huge}"), format!("{huge}/7"), format!("-{huge}")] {
            assert!(
                matches!(
                    parse_value(&s),
                    Err(CliError::BadRational { source: RationalError::NotRepresentable, .. })
                ),
                "{s}"
            );
        }
        let min = i128::MIN.to_string();
        assert_eq!(parse_value(&format!("0/{min}")).unwrap(), v(0, 1));
        assert_eq!(parse_value(&format!("{min}/{min}")).unwrap(), v(1, 1));
        assert!(parse_value(&format!("1/{min}")).is_err());
    }

    #[test]
    fn operator_spellings() {
        assert_eq!(parse_op("+").unwrap(), Op::Add);
        assert_eq!(parse_op("x").unwrap(), Op::Mul);
        assert_eq!(parse_op("div").unwrap(), Op::Div);
        assert!(parse_op("%").is_err());
        assert_eq!(Op::Sub.symbol(), "-");
    }

    #[test]
    fn subcommands_validate_into_requests() {
        let args = Args::try_parse_from(["rat", "eval", "-1/3", "-", "1/6", "--decimal"]).unwrap();
        assert_eq!(
            validate(&args.command).unwrap(),
            Request::Eval { lhs: v(-1, 3), op: Op::Sub, rhs: v(1, 6), decimal: true }
        );

        let args = Args::try_parse_from(["rat", "-vv", "pow", "2/3", "-2"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(validate(&args.command).unwrap(), Request::Pow(v(2, 3), -2));

        let args = Args::try_parse_from(["rat", "float", "0.1", "--single"]).unwrap();
        assert_eq!(validate(&args.command).unwrap(), Request::FloatF32(0.1));
    }

    #[test]
    fn bad_operands_are_reported() {
        let args = Args::try_parse_from(["rat", "pow", "2", "two"]).unwrap();
        assert!(matches!(validate(&args.command), Err(CliError::BadExponent(_))));
        let args = Args::try_parse_from(["rat", "float", "nope"]).unwrap();
        assert!(matches!(validate(&args.command), Err(CliError::BadFloat(_))));
    }
}
