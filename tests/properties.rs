//! Invariants checked over random playouts.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quoridor::board::{Action, Cell};
use quoridor::movegen::random_action;
use quoridor::search::reaches_goal;
use quoridor::Game;

const MAX_PLIES: usize = 200;

fn every_player_connected(game: &Game) -> bool {
    (0..game.player_count()).all(|p| {
        let goal = game.seats()[p].goal;
        reaches_goal(game.walls(), game.positions()[p], goal)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_playouts_keep_invariants(
        seed in any::<u64>(),
        size in prop::sample::select(vec![5usize, 7, 9]),
        players in prop::sample::select(vec![2usize, 4]),
        wall_bias in 0.0f64..0.6,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(size, players).unwrap();
        let mut budgets = game.walls_left().to_vec();

        for _ in 0..MAX_PLIES {
            let Some(action) = random_action(game.state(), wall_bias, &mut rng) else {
                break;
            };

            let first = game.legal_destinations();
            prop_assert_eq!(&first, &game.legal_destinations());

            let mover = game.current_player();
            if let Action::Move(to) = action {
                prop_assert!(first.contains(&to));
            }
            prop_assert!(game.apply(action).is_ok());
            prop_assert_eq!(game.current_player(), (mover + 1) % players);

            for (p, (&now, &was)) in game.walls_left().iter().zip(&budgets).enumerate() {
                let spent = usize::from(p == mover && matches!(action, Action::Wall(_)));
                prop_assert_eq!(now + spent, was);
            }
            budgets = game.walls_left().to_vec();

            prop_assert!(every_player_connected(&game));
            if game.is_terminal() {
                prop_assert_eq!(game.winner(), Some(mover));
                break;
            }
        }

        if game.is_terminal() {
            let before = game.clone();
            let target = game.positions()[game.current_player()];
            prop_assert!(!game.submit_move(target.row, target.col.saturating_sub(1)));
            prop_assert!(!game.submit_wall(0, 0, quoridor::Orientation::Horizontal));
            prop_assert_eq!(game, before);
        }
    }

    #[test]
    fn moves_outside_enumeration_are_rejected(
        seed in any::<u64>(),
        row in 0usize..9,
        col in 0usize..9,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(9, 2).unwrap();
        for _ in 0..10 {
            match random_action(game.state(), 0.3, &mut rng) {
                Some(action) if !game.is_terminal() => {
                    game.apply(action).unwrap();
                }
                _ => break,
            }
        }

        let target = Cell::new(row, col);
        let legal = game.legal_destinations().contains(&target);
        let before = game.clone();
        prop_assert_eq!(game.submit_move(row, col), legal);
        if !legal {
            prop_assert_eq!(game, before);
        }
    }
}
