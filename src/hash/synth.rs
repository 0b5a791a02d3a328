//! The program synthesizer (spec component D) and its direct tree-walking
//! evaluator (spec component E, replacing the ancestor's embedded scripting
//! interpreter per §9 Design Notes: "a systems-language rewrite SHOULD
//! replace the interpreter with a direct tree-walking evaluator over the
//! nine-mixer grammar").
//!
//! [`synthesize`] emits the same sequence of decisions the ancestor's
//! `MakeHashCode` would have rendered as Lua source text; here they become a
//! small AST instead. The grammar has exactly two statement forms: a call to
//! one of the nine mixers, or a recursive descent into another synthesized
//! function. Every function ends with an implicit `return y, x` swap (see
//! [`eval_function`]); this is intentional and consensus-visible.

use super::mixers;
use super::pcg32::Pcg32;
use super::primes::PRIMES;

pub const FUNC_COUNT: usize = 16;
const MIN_STMT_NUM: u32 = 8;
const MAX_STMT_NUM: u32 = 12;
const OP_COUNT: u32 = 10;
const CALL_WEIGHT: u32 = 2;

const LETTERS: [u8; 9] = *b"ABCDEFGHI";

/// A single statement in a synthesized function body.
#[derive(Clone, Copy, Debug)]
pub enum Stmt {
    /// Invoke one of the nine mixers, identified by its letter.
    Call(u8),
    /// Recursive descent into another synthesized function, guarded at
    /// evaluation time by the remaining depth budget.
    Recurse,
}

/// The sixteen synthesized functions produced by [`synthesize`].
pub struct Program {
    funcs: [Vec<Stmt>; FUNC_COUNT],
}

impl Program {
    /// Deterministically emit the program for a given `(seed, incr)` pair.
    /// Byte-identical (statement-for-statement identical) on any platform,
    /// for the same inputs.
    pub fn synthesize(seed: u64, incr: u64) -> Self {
        let mut rng = Pcg32::new(seed, incr);
        let funcs: [Vec<Stmt>; FUNC_COUNT] = std::array::from_fn(|_| {
            let n = rng.randint(MIN_STMT_NUM, MAX_STMT_NUM);
            (0..n)
                .map(|_| {
                    let k = rng.next_u32() % (OP_COUNT + CALL_WEIGHT);
                    if k <= OP_COUNT - 2 {
                        Stmt::Call(LETTERS[k as usize])
                    } else {
                        Stmt::Recurse
                    }
                })
                .collect()
        });
        Program { funcs }
    }

    /// Invoke synthesized function `idx` with arguments `(x, y)` and a
    /// recursion-depth budget. Mirrors the ancestor's harness entry point
    /// `f[idx](x, y, depth)`.
    pub fn call(&self, idx: usize, x: u32, y: u32, depth: u32) -> (u32, u32) {
        self.eval_function(idx, x, y, depth)
    }

    /// Run one synthesized function body. Every statement list ends with an
    /// implicit swapped return: the function's own `(x, y)` working state
    /// comes back to the caller as `(y, x)`. A `Recurse` statement threads
    /// the recursive call's *swapped* return straight into `(y, x)` for the
    /// remainder of this function — net effect: the swap cancels out across
    /// one level of recursion, but not at the outermost (harness) call,
    /// which reads the final `(y, x)` directly.
    fn eval_function(&self, idx: usize, x: u32, y: u32, depth: u32) -> (u32, u32) {
        let mut x = x;
        let mut y = y;
        for stmt in &self.funcs[idx] {
            match *stmt {
                Stmt::Call(letter) => {
                    let m = PRIMES[(y % 97) as usize];
                    let n = PRIMES[((x.wrapping_add(48)) % 97) as usize];
                    let (mx, my) = mixers::call(letter, x, y, m, n);
                    // ancestor's generated statement is `y, x = f(x, y, ...)`:
                    // the mixer's own (x', y') return lands swapped into
                    // this function's working state.
                    y = mx;
                    x = my;
                }
                Stmt::Recurse => {
                    if depth > 0 {
                        let z = select_branch(x, y);
                        let (r0, r1) = self.eval_function(z, x, y, depth - 1);
                        y = r0;
                        x = r1;
                    }
                }
            }
        }
        (y, x)
    }
}

/// Choose the function index for a recursive descent from the current
/// working state. Two branches, selected by a cheap modular test over `x`
/// and `y`.
fn select_branch(x: u32, y: u32) -> usize {
    if (x % 23) < 12 && (y % 29) > 14 {
        (((x % 71) + (y % 19)) % FUNC_COUNT as u32) as usize
    } else {
        (((x % 23) + (y % 67)) % FUNC_COUNT as u32) as usize
    }
}
