//! Calculator driven by simplecli
//!
//! ```bash
//! calc add 10 20
//! calc --base=16 --verbose multiply 10 10
//! ```
//!
//! Operands are always typed in decimal digits; `--base` reinterprets
//! those digits in another radix before computing.

use std::process::ExitCode;

use simplecli::{Command, Describe};

struct Calc {
    base: i32,
    verbose: bool,
}

impl Calc {
    /// Reads the decimal digits of `n` in `self.base`, or 0 if they don't fit
    ///
    /// At most ten digits in base 36 stay below 2^52, so sums and products
    /// of two rebased operands always fit in `i128`.
    fn rebase(&self, n: i32) -> i128 {
        u32::try_from(self.base)
            .ok()
            .filter(|radix| (2..=36).contains(radix))
            .and_then(|radix| i128::from_str_radix(&n.to_string(), radix).ok())
            .unwrap_or(0)
    }

    fn add(&self, x: i32, y: i32) {
        let (x, y) = (self.rebase(x), self.rebase(y));
        if self.verbose {
            print!("{} + {} = ", x, y);
        }
        println!("{}", x + y);
    }

    fn multiply(&self, x: i32, y: i32) {
        let (x, y) = (self.rebase(x), self.rebase(y));
        if self.verbose {
            print!("{} * {} = ", x, y);
        }
        println!("{}", x * y);
    }
}

impl Command for Calc {
    fn describe(cli: &mut Describe<Self>) {
        cli.option("Base", |calc| &mut calc.base)
            .tag("radix the operand digits are read in");
        cli.option("Verbose", |calc| &mut calc.verbose)
            .tag("show the expression");

        cli.operation("Add", |calc, (x, y): (i32, i32)| calc.add(x, y))
            .about("Add two numbers");
        cli.operation("Multiply", |calc, (x, y): (i32, i32)| calc.multiply(x, y))
            .about("Multiply two numbers");
    }
}

fn main() -> ExitCode {
    simplecli::init_logging();
    simplecli::handle(&mut Calc {
        base: 10,
        verbose: false,
    })
}
