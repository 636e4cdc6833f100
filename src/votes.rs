//! Vote list generation.

/// Build the ordered list of vote tokens for one benchmark query.
///
/// Tokens are labeled `vote#0` through `vote#(count-1)` in ascending order.
/// The labels carry no meaning beyond being distinct; the server only cares
/// how many there are. A zero or negative count yields an empty list rather
/// than an error.
pub fn generate_votes(count: i64) -> Vec<String> {
    let mut votes = Vec::new();
    for i in 0..count {
        votes.push(format!("vote#{}", i));
    }
    votes
}
