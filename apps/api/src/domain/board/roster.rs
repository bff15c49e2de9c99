use crate::domain::member::{Member, Rank};

/// The fixed roster every board starts from, in display order
pub fn seed_roster() -> Vec<Member> {
    vec![
        Member::from_seed("1", "Alice", Rank::THREE),
        Member::from_seed("2", "Bob", Rank::TWO),
        Member::from_seed("3", "Charlie", Rank::ONE),
        Member::from_seed("4", "David", Rank::TWO),
        Member::from_seed("5", "Eve", Rank::THREE),
        Member::from_seed("6", "Frank", Rank::ONE),
        Member::from_seed("7", "Grace", Rank::TWO),
        Member::from_seed("8", "Henry", Rank::TWO),
        Member::from_seed("9", "Ivy", Rank::THREE),
        Member::from_seed("10", "Jack", Rank::ONE),
    ]
}
