//! Library of parser functions

// nom parser combinators
use nom::character::complete::{self, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res, verify};
use nom::number::complete::double;
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;

/// Unsigned size value, trimming preceding whitespace
fn uint(i: &str) -> IResult<&str, usize> {
    map_res(preceded(space0, digit1), str::parse::<usize>)(i)
}

/// Unsigned 32-bit integer value, trimming preceding whitespace
fn uint32(i: &str) -> IResult<&str, u32> {
    preceded(space0, complete::u32)(i)
}

/// `<number of elements> <number of blocks>`
pub(crate) fn counts(i: &str) -> IResult<&str, (usize, usize)> {
    all_consuming(terminated(tuple((uint, uint)), space0))(i)
}

/// `<element id> <block id>`
pub(crate) fn element_block(i: &str) -> IResult<&str, (usize, u32)> {
    all_consuming(terminated(tuple((uint, uint32)), space0))(i)
}

/// `<block id> <resistivity> [anything]`
///
/// Anything after the resistivity must be separated by whitespace so that
/// `100.0abc` is still rejected. Values that are not finite (`inf`, `nan`, or
/// out of range such as `1e400`) are rejected.
pub(crate) fn block_value(i: &str) -> IResult<&str, (u32, f64)> {
    let finite = verify(double, |v: &f64| v.is_finite());
    let (rest, value) = tuple((uint32, preceded(space1, finite)))(i)?;
    if rest.trim().is_empty() {
        Ok(("", value))
    } else {
        let (rest, _) = space1(rest)?;
        Ok((rest, value))
    }
}
