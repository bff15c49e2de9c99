//! Property tests for the board invariants
//!
//! Random sequences of drags and wins must never break the partition of
//! the roster or overfill a team.

use proptest::prelude::*;
use teamboard_api::domain::board::{DragEnd, GroupId, Side, TeamBoard, MAX_TEAM_SIZE};
use teamboard_api::domain::member::MemberId;

#[derive(Debug, Clone)]
enum Action {
    Drag { member: String, over: Option<String> },
    Win(Side),
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Roster ids plus a few that are not on the board
fn arb_member() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => (1..=10u8).prop_map(|n| n.to_string()),
        1 => Just("0".to_string()),
        1 => Just("11".to_string()),
    ]
}

fn arb_drop_zone() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => Just(Some("attackers".to_string())),
        4 => Just(Some("defenders".to_string())),
        2 => Just(Some("unassigned".to_string())),
        1 => Just(Some("bench".to_string())),
        2 => Just(None),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (arb_member(), arb_drop_zone()).prop_map(|(member, over)| Action::Drag { member, over }),
        1 => Just(Action::Win(Side::Attackers)),
        1 => Just(Action::Win(Side::Defenders)),
    ]
}

fn apply(board: &mut TeamBoard, action: &Action) {
    match action {
        Action::Drag { member, over } => {
            let drag = DragEnd {
                active: MemberId::new(member.clone()).unwrap(),
                over: over.clone(),
            };
            board.handle_drag_end(&drag);
        }
        Action::Win(side) => {
            board.handle_win(*side);
        }
    }
}

fn total_wins(board: &TeamBoard) -> u64 {
    GroupId::ALL
        .into_iter()
        .flat_map(|group| board.group(group))
        .map(|m| u64::from(m.wins()))
        .sum()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every reachable state partitions the roster and respects team caps.
    #[test]
    fn invariants_hold_for_any_sequence(actions in prop::collection::vec(arb_action(), 0..80)) {
        let mut board = TeamBoard::seeded();

        for action in &actions {
            apply(&mut board, action);

            prop_assert!(board.verify_invariants().is_ok());
            prop_assert!(board.group_ids(GroupId::Attackers).len() <= MAX_TEAM_SIZE);
            prop_assert!(board.group_ids(GroupId::Defenders).len() <= MAX_TEAM_SIZE);

            let placed: usize = GroupId::ALL
                .into_iter()
                .map(|group| board.group_ids(group).len())
                .sum();
            prop_assert_eq!(placed, board.roster_size());
        }
    }

    /// A drag released outside any drop zone never changes the board.
    #[test]
    fn released_drag_never_changes_state(
        actions in prop::collection::vec(arb_action(), 0..40),
        member in arb_member(),
    ) {
        let mut board = TeamBoard::seeded();
        for action in &actions {
            apply(&mut board, action);
        }
        let before = board.snapshot();

        let event = board.handle_drag_end(&DragEnd::released(MemberId::new(member).unwrap()));

        prop_assert!(event.is_none());
        prop_assert_eq!(board.snapshot(), before);
    }

    /// Dropping onto a full team always lands the member in the pool.
    #[test]
    fn full_team_redirects_to_pool(
        team in prop_oneof![Just(GroupId::Attackers), Just(GroupId::Defenders)],
        order in Just((1..=10u8).map(|n| n.to_string()).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut board = TeamBoard::seeded();
        for member in &order[..MAX_TEAM_SIZE] {
            board.handle_drag_end(&DragEnd::onto(MemberId::new(member.clone()).unwrap(), team.as_str()));
        }
        let team_before: Vec<MemberId> = board.group_ids(team).to_vec();

        let sixth = MemberId::new(order[MAX_TEAM_SIZE].clone()).unwrap();
        board.handle_drag_end(&DragEnd::onto(sixth.clone(), team.as_str()));

        prop_assert_eq!(board.group_of(&sixth), Some(GroupId::Unassigned));
        prop_assert_eq!(board.group_ids(team), &team_before[..]);
    }

    /// Drags never touch wins; each win adds exactly the side's size.
    #[test]
    fn wins_change_only_by_side_size(actions in prop::collection::vec(arb_action(), 0..60)) {
        let mut board = TeamBoard::seeded();

        for action in &actions {
            let before = total_wins(&board);
            let expected = match action {
                Action::Win(side) => before + board.group_ids(side.group()).len() as u64,
                Action::Drag { .. } => before,
            };

            apply(&mut board, action);

            prop_assert_eq!(total_wins(&board), expected);
        }
    }
}
