// crates/rat_cli/src/main.rs
//
// `rat`: a small exact-arithmetic calculator over `Rational<i128>`.
// Parses operands, runs one request, prints one line (or one JSON object),
// and maps failures onto a fixed exit-code table.

mod args;

mod exitcodes {
    pub const OK: u8 = 0;
    /// Malformed operands or flags (clap uses the same code).
    pub const USAGE: u8 = 2;
    /// Zero denominator or division by zero, and floats with no exact rational in range.
    pub const DOMAIN: u8 = 3;
    /// The exact result does not fit the 128-bit base type.
    pub const OVERFLOW: u8 = 4;
}

use std::cmp::Ordering;
use std::process::ExitCode;

use args::{parse_and_validate, Args, CliError, Op, Request, Value};
use rat_core::{Rational, RationalError};
use tracing_subscriber::EnvFilter;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Usage(String),
    Domain(RationalError),
    Overflow(&'static str),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Usage(m) => f.write_str(m),
            MainError::Domain(e) => write!(f, "{e}"),
            MainError::Overflow(what) => write!(f, "{what} overflows the 128-bit base type"),
        }
    }
}

impl From<RationalError> for MainError {
    fn from(e: RationalError) -> Self {
        MainError::Domain(e)
    }
}

/// What a request produced, before rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "report-json",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
enum Outcome {
    Value {
        value: Value,
        #[cfg_attr(feature = "report-json", serde(skip_serializing_if = "Option::is_none"))]
        decimal: Option<f64>,
    },
    Ordering {
        lhs: Value,
        rhs: Value,
        ordering: &'static str,
    },
}

fn main() -> ExitCode {
    let (args, request) = match parse_and_validate() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("rat: error: {e}");
            let rc = match e {
                CliError::BadRational { source: RationalError::ZeroDenominator, .. } => exitcodes::DOMAIN,
                _ => exitcodes::USAGE,
            };
            return ExitCode::from(rc);
        }
    };
    init_logging(&args);

    let rc = match run(&request).and_then(|out| render(&args, &out)) {
        Ok(line) => {
            println!("{line}");
            exitcodes::OK
        }
        Err(e) => {
            tracing::debug!(?e, "request failed");
            eprintln!("rat: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc)
}

/// stderr logging; `RUST_LOG` wins over the verbosity flags.
fn init_logging(args: &Args) {
    let default = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn map_error(e: &MainError) -> u8 {
    use exitcodes::*;
    match e {
        MainError::Usage(_) => USAGE,
        MainError::Domain(_) => DOMAIN,
        MainError::Overflow(_) => OVERFLOW,
    }
}

fn run(request: &Request) -> Result<Outcome, MainError> {
    tracing::debug!(?request, "dispatch");
    let value = |value| Outcome::Value { value, decimal: None };
    match *request {
        Request::Canon(v) => Ok(value(v)),
        Request::FloatF64(x) => Ok(value(Rational::from_float(x)?)),
        Request::FloatF32(x) => Ok(value(Rational::from_float(x)?)),
        Request::Eval { lhs, op, rhs, decimal } => {
            let result = eval(lhs, op, rhs)?;
            let decimal = if decimal { Some(result.to_f64()) } else { None };
            Ok(Outcome::Value { value: result, decimal })
        }
        Request::Cmp(lhs, rhs) => Ok(Outcome::Ordering { lhs, rhs, ordering: compare(&lhs, &rhs)? }),
        Request::Pow(base, exp) => {
            if exp < 0 && base.is_zero() {
                return Err(RationalError::DivisionByZero.into());
            }
            base.checked_pow(exp).map(value).ok_or(MainError::Overflow("power"))
        }
    }
}

fn eval(lhs: Value, op: Op, rhs: Value) -> Result<Value, MainError> {
    let result = match op {
        Op::Add => lhs.checked_add(&rhs),
        Op::Sub => lhs.checked_sub(&rhs),
        Op::Mul => lhs.checked_mul(&rhs),
        Op::Div => {
            if rhs.is_zero() {
                return Err(RationalError::DivisionByZero.into());
            }
            lhs.checked_div(&rhs)
        }
    };
    tracing::trace!(%lhs, op = op.symbol(), %rhs, ?result, "eval");
    result.ok_or(MainError::Overflow("result"))
}

/// Sign of `lhs - rhs`; the plain `Ord` cross-multiplies and could overflow.
fn compare(lhs: &Value, rhs: &Value) -> Result<&'static str, MainError> {
    let ordering = if lhs == rhs {
        Ordering::Equal
    } else {
        let diff = lhs.checked_sub(rhs).ok_or(MainError::Overflow("comparison"))?;
        diff.numer().cmp(&0)
    };
    Ok(match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    })
}

fn render(args: &Args, out: &Outcome) -> Result<String, MainError> {
    if args.json {
        return render_json(out);
    }
    Ok(match out {
        Outcome::Value { value, decimal: None } => value.to_string(),
        Outcome::Value { value, decimal: Some(d) } => format!("{value} ~ {d}"),
        Outcome::Ordering { ordering, .. } => (*ordering).to_string(),
    })
}

#[cfg(feature = "report-json")]
fn render_json(out: &Outcome) -> Result<String, MainError> {
    serde_json::to_string(out).map_err(|e| MainError::Usage(format!("json: {e}")))
}

#[cfg(not(feature = "report-json"))]
fn render_json(_out: &Outcome) -> Result<String, MainError> {
    Err(MainError::Usage("--json requires the `report-json` feature".into()))
}

/* ---- Tests ---- */
#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: i128, d: i128) -> Value {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn eval_is_exact() {
        assert_eq!(eval(v(1, 3), Op::Add, v(1, 6)).unwrap(), v(1, 2));
        assert_eq!(eval(v(1, 3), Op::Div, v(-2, 3)).unwrap(), v(-1, 2));
        assert!(matches!(
            eval(v(1, 3), Op::Div, v(0, 1)),
            Err(MainError::Domain(RationalError::DivisionByZero))
        ));
        assert!(matches!(eval(v(i128::MAX, 1), Op::Add, v(1, 1)), Err(MainError::Overflow(_))));
    }

    #[test]
    fn compare_prints_relation() {
        assert_eq!(compare(&v(1, 2), &v(2, 3)).unwrap(), "<");
        assert_eq!(compare(&v(-3, 2), &v(-6, 4)).unwrap(), "=");
        assert_eq!(compare(&v(3, 2), &v(1, 2)).unwrap(), ">");
    }

    #[test]
    fn pow_and_float_requests() {
        assert_eq!(run(&Request::Pow(v(2, 3), -2)).unwrap(), Outcome::Value { value: v(9, 4), decimal: None });
        assert!(matches!(run(&Request::Pow(v(0, 1), -1)), Err(MainError::Domain(_))));
        assert!(matches!(run(&Request::Pow(v(10, 1), 40)), Err(MainError::Overflow(_))));
        assert!(matches!(run(&Request::FloatF64(f64::NAN)), Err(MainError::Domain(RationalError::NonFinite))));
        assert_eq!(
            run(&Request::FloatF64(0.75)).unwrap(),
            Outcome::Value { value: v(3, 4), decimal: None }
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(map_error(&MainError::Usage(String::new())), exitcodes::USAGE);
        assert_eq!(map_error(&RationalError::ZeroDenominator.into()), exitcodes::DOMAIN);
        assert_eq!(map_error(&MainError::Overflow("x")), exitcodes::OVERFLOW);
    }
}
