//! Game integration tests.

use c8rs::{
    Card, ConfigError, Deck, Game, GameOptions, GameState, PACK_SIZE, Player, Rank, StepError,
    Suit, TurnEvent,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_of(cards: &[Card]) -> Deck {
    cards.iter().copied().collect()
}

fn full_pack() -> Vec<Card> {
    let mut cards = Vec::with_capacity(PACK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(card(suit, rank));
        }
    }
    cards
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards = game.table.draw.to_vec();
    cards.extend(game.table.discard.to_vec());
    cards.extend(game.table.hands[0].to_vec());
    cards.extend(game.table.hands[1].to_vec());
    cards
}

#[test]
fn deck_push_and_pop_order() {
    let mut deck = Deck::new();
    assert!(deck.is_empty());

    deck.push_top(card(Suit::Hearts, Rank::Two));
    deck.push_top(card(Suit::Spades, Rank::Ace));
    deck.push_bottom(card(Suit::Clubs, Rank::Nine));

    assert_eq!(deck.len(), 3);
    assert_eq!(deck.peek_top(), Some(&card(Suit::Spades, Rank::Ace)));
    assert_eq!(deck.pop_top(), Some(card(Suit::Spades, Rank::Ace)));
    assert_eq!(deck.pop_top(), Some(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.pop_top(), Some(card(Suit::Clubs, Rank::Nine)));
    assert_eq!(deck.pop_top(), None);
}

#[test]
fn deck_remove_at_reports_invalid_indices() {
    let mut deck = deck_of(&[
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::King),
    ]);

    assert_eq!(deck.remove_at(3), None);
    assert_eq!(deck.remove_at(1), Some(card(Suit::Hearts, Rank::Five)));
    // Remaining cards keep their order around the removed slot.
    assert_eq!(
        deck.to_vec(),
        vec![card(Suit::Clubs, Rank::Two), card(Suit::Spades, Rank::King)]
    );

    let mut empty = Deck::new();
    assert_eq!(empty.remove_at(0), None);
    assert_eq!(empty.pop_top(), None);
}

#[test]
fn deck_snapshot_is_independent_of_later_mutation() {
    let mut deck = deck_of(&[card(Suit::Clubs, Rank::Two), card(Suit::Hearts, Rank::Five)]);
    let snapshot = deck.to_vec();

    deck.pop_top();
    deck.push_top(card(Suit::Spades, Rank::Ace));

    assert_eq!(
        snapshot,
        vec![card(Suit::Clubs, Rank::Two), card(Suit::Hearts, Rank::Five)]
    );
}

#[test]
fn deck_sort_orders_by_suit_then_rank() {
    let mut deck = deck_of(&[
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::King),
    ]);
    deck.sort_by_suit_then_rank();

    let cards = deck.to_vec();
    for pair in cards.windows(2) {
        let ordered = pair[0].suit < pair[1].suit
            || (pair[0].suit == pair[1].suit && pair[0].rank <= pair[1].rank);
        assert!(ordered, "{:?} should come before {:?}", pair[0], pair[1]);
    }
    assert_eq!(cards[0], card(Suit::Clubs, Rank::Five));
    assert_eq!(cards[4], card(Suit::Spades, Rank::Two));
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut deck = deck_of(&full_pack());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    deck.shuffle(&mut rng);

    // Same multiset, new order.
    assert_eq!(sorted(deck.to_vec()), sorted(full_pack()));
    assert_ne!(deck.to_vec(), full_pack());

    // The same seed replays the same permutation.
    let mut replay = deck_of(&full_pack());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    replay.shuffle(&mut rng);
    assert_eq!(replay.to_vec(), deck.to_vec());

    // A different seed lands elsewhere.
    let mut other = deck_of(&full_pack());
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    other.shuffle(&mut rng);
    assert_ne!(other.to_vec(), deck.to_vec());
}

#[test]
fn deal_counts_for_single_pack() {
    let game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(game.cards_remaining(), 35); // 52 - 8 - 8 - 1
    assert_eq!(game.table.hands[0].len(), 8);
    assert_eq!(game.table.hands[1].len(), 8);
    assert_eq!(game.table.discard.len(), 1);
    assert_eq!(game.table.total_cards(), PACK_SIZE);
    assert_eq!(game.state(), GameState::Turn(Player::One));
    assert_eq!(sorted(all_cards(&game)), sorted(full_pack()));
}

#[test]
fn dealt_hands_are_sorted() {
    let game = Game::new(GameOptions::default(), 99).unwrap();

    for hand in &game.table.hands {
        let cards = hand.to_vec();
        for pair in cards.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}

#[test]
fn config_errors() {
    assert_eq!(
        Game::new(GameOptions::default().with_packs(0), 1).unwrap_err(),
        ConfigError::ZeroPacks
    );
    assert_eq!(
        Game::new(GameOptions::default().with_hand_size(0), 1).unwrap_err(),
        ConfigError::ZeroHandSize
    );
    // Two 26-card hands leave nothing to flip.
    assert_eq!(
        Game::new(GameOptions::default().with_hand_size(26), 1).unwrap_err(),
        ConfigError::HandTooLarge
    );
    // 25 each still leaves two cards.
    assert!(Game::new(GameOptions::default().with_hand_size(25), 1).is_ok());
}

#[test]
fn oversized_hand_requests_are_rejected_not_wrapped() {
    // Hand sizes whose card requirement overflows usize must surface as
    // a configuration error, never wrap past the pack-size guard.
    for hand_size in [usize::MAX, usize::MAX / 2 + 1] {
        assert_eq!(
            Game::new(GameOptions::default().with_hand_size(hand_size), 1).unwrap_err(),
            ConfigError::HandTooLarge
        );
    }
}

#[test]
fn first_match_in_sorted_order_is_played() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Clubs, Rank::Five), card(Suit::Hearts, Rank::Nine)]);
    game.table.discard = deck_of(&[card(Suit::Clubs, Rank::Two)]);

    let event = game.step().unwrap();
    assert_eq!(
        event,
        TurnEvent::Played {
            player: Player::One,
            card: card(Suit::Clubs, Rank::Five),
        }
    );
    assert_eq!(game.discard_top(), Some(card(Suit::Clubs, Rank::Five)));
    assert_eq!(game.table.hands[0].to_vec(), vec![card(Suit::Hearts, Rank::Nine)]);
    assert_eq!(game.state(), GameState::Turn(Player::Two));
}

#[test]
fn rank_match_counts_too() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Nine)]);
    game.table.discard = deck_of(&[card(Suit::Clubs, Rank::Two)]);

    let event = game.step().unwrap();
    assert_eq!(
        event,
        TurnEvent::Played {
            player: Player::One,
            card: card(Suit::Hearts, Rank::Two),
        }
    );
}

#[test]
fn no_match_draws_and_resorts_hand() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Hearts, Rank::King)]);
    game.table.discard = deck_of(&[card(Suit::Clubs, Rank::Two)]);
    game.table.draw = deck_of(&[card(Suit::Clubs, Rank::Three), card(Suit::Spades, Rank::Four)]);

    let event = game.step().unwrap();
    assert_eq!(
        event,
        TurnEvent::Drew {
            player: Player::One,
            card: card(Suit::Clubs, Rank::Three),
        }
    );
    assert_eq!(game.cards_remaining(), 1);
    // The drawn club sorts ahead of the held heart.
    assert_eq!(
        game.table.hands[0].to_vec(),
        vec![card(Suit::Clubs, Rank::Three), card(Suit::Hearts, Rank::King)]
    );
    assert_eq!(game.state(), GameState::Turn(Player::Two));
}

#[test]
fn refill_keeps_top_and_recycles_the_rest() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Hearts, Rank::King)]);
    game.table.draw = Deck::new();
    game.table.discard = deck_of(&[
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Ace),
    ]);

    let event = game.step().unwrap();
    assert_eq!(event, TurnEvent::Refilled);

    assert_eq!(game.table.discard.to_vec(), vec![card(Suit::Clubs, Rank::Two)]);
    assert_eq!(
        sorted(game.table.draw.to_vec()),
        sorted(vec![card(Suit::Hearts, Rank::Nine), card(Suit::Spades, Rank::Ace)])
    );
    // The refill is not a player action; the same player draws next.
    assert_eq!(game.state(), GameState::Turn(Player::One));

    let event = game.step().unwrap();
    assert!(matches!(
        event,
        TurnEvent::Drew {
            player: Player::One,
            ..
        }
    ));
    assert_eq!(game.table.hands[0].len(), 2);
}

#[test]
fn winning_play_ends_the_game() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Clubs, Rank::Five)]);
    game.table.discard = deck_of(&[card(Suit::Clubs, Rank::Two)]);

    let event = game.step().unwrap();
    assert_eq!(event, TurnEvent::Won { player: Player::One });
    assert_eq!(game.state(), GameState::Won(Player::One));
    assert_eq!(game.winner(), Some(Player::One));
    assert!(game.is_over());
    assert_eq!(game.current_player(), None);

    assert_eq!(game.step().unwrap_err(), StepError::GameOver);
}

#[test]
fn exhausted_piles_are_a_stalemate_not_a_win() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.hands[0] = deck_of(&[card(Suit::Hearts, Rank::King)]);
    game.table.draw = Deck::new();
    game.table.discard = deck_of(&[card(Suit::Clubs, Rank::Two)]);

    let event = game.step().unwrap();
    assert_eq!(event, TurnEvent::Stalemate);
    assert_eq!(game.state(), GameState::Stalemate);
    assert_eq!(game.winner(), None);
    assert!(game.is_over());

    assert_eq!(game.step().unwrap_err(), StepError::GameOver);
}

#[test]
fn transfers_on_empty_piles_move_nothing() {
    let mut game = Game::new(GameOptions::default(), 1).unwrap();
    game.table.draw = Deck::new();

    let before = game.table.clone();
    assert_eq!(
        game.table
            .transfer_top(c8rs::DeckId::Draw, c8rs::DeckId::Hand(Player::One)),
        None
    );
    assert_eq!(
        game.table
            .transfer_at(c8rs::DeckId::Discard, 5, c8rs::DeckId::Draw),
        None
    );
    assert_eq!(game.table, before);
}

#[test]
fn snapshot_reflects_the_table() {
    let game = Game::new(GameOptions::default(), 4).unwrap();
    let snapshot = game.snapshot();

    assert_eq!(snapshot.draw_count, game.cards_remaining());
    assert_eq!(snapshot.discard_top, game.discard_top());
    assert_eq!(snapshot.hand1, game.table.hands[0].to_vec());
    assert_eq!(snapshot.hand2, game.table.hands[1].to_vec());
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut first = Game::new(GameOptions::default(), 2024).unwrap();
    let mut second = Game::new(GameOptions::default(), 2024).unwrap();

    assert_eq!(first.snapshot(), second.snapshot());

    for _ in 0..20 {
        let a = first.step();
        let b = second.step();
        assert_eq!(a, b);
        assert_eq!(first.snapshot(), second.snapshot());
        if first.is_over() {
            break;
        }
    }
}

#[test]
fn cards_are_conserved_through_a_full_game() {
    let expected = sorted(full_pack());
    let mut game = Game::new(GameOptions::default(), 3).unwrap();

    for _ in 0..10_000 {
        assert_eq!(game.table.total_cards(), PACK_SIZE);
        assert_eq!(sorted(all_cards(&game)), expected);

        match game.step().unwrap() {
            TurnEvent::Won { player } => {
                assert!(game.table.hand(player).is_empty());
                assert_eq!(game.table.total_cards(), PACK_SIZE);
                return;
            }
            TurnEvent::Stalemate => {
                assert_eq!(game.table.total_cards(), PACK_SIZE);
                return;
            }
            _ => {}
        }
    }
    panic!("game did not finish within the step bound");
}

#[test]
fn multi_pack_games_deal_duplicates() {
    let options = GameOptions::default().with_packs(2).with_hand_size(10);
    let game = Game::new(options, 5).unwrap();

    let mut expected = full_pack();
    expected.extend(full_pack());

    assert_eq!(game.table.total_cards(), 2 * PACK_SIZE);
    assert_eq!(sorted(all_cards(&game)), sorted(expected));
    assert_eq!(game.cards_remaining(), 2 * PACK_SIZE - 10 - 10 - 1);
}
