// SPDX-License-Identifier: MIT
// Checked-arithmetic failure taxonomy.

/// Error raised by a checked arithmetic step.
///
/// Each fallible computation site in this package owns a unique step
/// identifier, so a failing test or a debugger can pinpoint exactly which
/// operation gave out. Contract crates collapse the step into their own
/// error-code band when crossing the ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    AddOverflow(u8),
    CastOverflow(u8),
    DivByZero(u8),
    MulOverflow(u8),
    SubUnderflow(u8),
}
