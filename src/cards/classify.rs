use super::card::Card;
use super::evals::HandError;
use super::evals::HandEval;
use super::hand::Hand;
use super::rank::Rank;
use super::ranking::HandRanking;
use super::suit::Suit;

/// Classify 5 to 9 distinct cards into the best achievable 5-card hand.
///
/// This is the reference implementation: straightforward rank counting in
/// strict category priority, strongest first. The bit-packed Evaluator must
/// agree with it on every valid input.
pub fn classify(cards: &[Card]) -> Result<HandEval, HandError> {
    gather(cards).map(reference)
}

/// classify hole + board as plain best-of-seven
pub fn classify_holdem(hole: &[Card; 2], board: &[Card; 5]) -> Result<HandEval, HandError> {
    let mut cards = [hole[0]; 7];
    cards[..2].copy_from_slice(hole);
    cards[2..].copy_from_slice(board);
    classify(&cards)
}

const HOLE_PAIRS: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];
const BOARD_TRIPLES: [[usize; 3]; 10] = [
    [0, 1, 2],
    [0, 1, 3],
    [0, 1, 4],
    [0, 2, 3],
    [0, 2, 4],
    [0, 3, 4],
    [1, 2, 3],
    [1, 2, 4],
    [1, 3, 4],
    [2, 3, 4],
];

/// Omaha uses exactly 2 of 4 hole cards and exactly 3 of 5 board cards,
/// which is not the same as best-of-nine: every one of the 60 eligible
/// 5-card combinations is classified and the best kept.
pub fn classify_omaha(hole: &[Card; 4], board: &[Card; 5]) -> Result<HandEval, HandError> {
    let mut cards = [hole[0]; 9];
    cards[..4].copy_from_slice(hole);
    cards[4..].copy_from_slice(board);
    gather(&cards)?;
    Ok(HOLE_PAIRS
        .iter()
        .flat_map(|h| BOARD_TRIPLES.iter().map(move |b| (h, b)))
        .map(|(h, b)| {
            [
                hole[h[0]],
                hole[h[1]],
                board[b[0]],
                board[b[1]],
                board[b[2]],
            ]
        })
        .map(|five| reference(Hand::from(&five[..])))
        .max()
        .expect("sixty combinations"))
}

/// validate distinctness and size, then collapse into rank masks
pub(crate) fn gather(cards: &[Card]) -> Result<Hand, HandError> {
    if !(5..=9).contains(&cards.len()) {
        return Err(HandError::Size(cards.len()));
    }
    let mut hand = Hand::empty();
    for &card in cards {
        if hand.contains(card) {
            return Err(HandError::Duplicate(card));
        }
        hand.insert(card);
    }
    Ok(hand)
}

/// highest rank completing a run of five consecutive bits, if any.
/// the mask carries the ace at both ends, so the wheel falls out of the
/// same scan with Five on top.
fn straight_high(mask: u16) -> Option<Rank> {
    (u8::from(Rank::Five)..=u8::from(Rank::Ace))
        .rev()
        .find(|hi| {
            let run = 0b11111 << (hi - 4);
            mask & run == run
        })
        .map(Rank::from)
}

/// physical ranks present in a mask, strongest first
fn descending(mask: u16) -> impl Iterator<Item = Rank> {
    (u8::from(Rank::Two)..=u8::from(Rank::Ace))
        .rev()
        .filter(move |r| mask & (1 << r) != 0)
        .map(Rank::from)
}

/// pad a tie-break tuple to exactly five with AceLow
fn tuple(ranks: impl IntoIterator<Item = Rank>) -> [Rank; 5] {
    let mut out = [Rank::AceLow; 5];
    for (slot, rank) in out.iter_mut().zip(ranks) {
        *slot = rank;
    }
    out
}

fn reference(hand: Hand) -> HandEval {
    let ranks = hand.ranks();
    if let Some(high) = Suit::all()
        .iter()
        .filter_map(|suit| straight_high(hand.of(*suit)))
        .max()
    {
        return HandEval::from((HandRanking::StraightFlush, tuple([high])));
    }
    if let Some(quad) = descending(ranks).find(|r| hand.count(*r) == 4) {
        let kick = descending(ranks)
            .find(|r| *r != quad)
            .expect("at least five cards");
        return HandEval::from((HandRanking::FourOfAKind, tuple([quad, kick])));
    }
    if let Some(trips) = descending(ranks).find(|r| hand.count(*r) >= 3) {
        // a second trip-rank degrades to serve as the pair
        if let Some(pair) = descending(ranks).find(|r| *r != trips && hand.count(*r) >= 2) {
            return HandEval::from((HandRanking::FullHouse, tuple([trips, pair])));
        }
        if let Some(suit) = flush_suit(&hand) {
            return flush(&hand, suit);
        }
        if let Some(high) = straight_high(ranks) {
            return HandEval::from((HandRanking::Straight, tuple([high])));
        }
        let kicks = descending(ranks).filter(|r| *r != trips).take(2);
        let mut out = vec![trips];
        out.extend(kicks);
        return HandEval::from((HandRanking::Set, tuple(out)));
    }
    if let Some(suit) = flush_suit(&hand) {
        return flush(&hand, suit);
    }
    if let Some(high) = straight_high(ranks) {
        return HandEval::from((HandRanking::Straight, tuple([high])));
    }
    let mut pairs = descending(ranks).filter(|r| hand.count(*r) == 2);
    match (pairs.next(), pairs.next()) {
        (Some(hi), Some(lo)) => {
            // a third pair's rank re-enters the pool as an ordinary kicker
            let kick = descending(ranks)
                .find(|r| *r != hi && *r != lo)
                .expect("at least five cards");
            HandEval::from((HandRanking::TwoPair, tuple([hi, lo, kick])))
        }
        (Some(pair), None) => {
            let kicks = descending(ranks).filter(|r| *r != pair).take(3);
            let mut out = vec![pair];
            out.extend(kicks);
            HandEval::from((HandRanking::Pair, tuple(out)))
        }
        _ => HandEval::from((HandRanking::HighCard, tuple(descending(ranks).take(5)))),
    }
}

fn flush_suit(hand: &Hand) -> Option<Suit> {
    Suit::all()
        .into_iter()
        .find(|suit| (hand.of(*suit) & Rank::physical()).count_ones() >= 5)
}

fn flush(hand: &Hand, suit: Suit) -> HandEval {
    HandEval::from((
        HandRanking::Flush,
        tuple(descending(hand.of(suit)).take(5)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(Card::from).collect()
    }

    fn eval(s: &str) -> HandEval {
        classify(&cards(s)).unwrap()
    }

    #[test]
    fn rejects_duplicates() {
        let result = classify(&cards("As Kh Qd Jc As"));
        assert!(result == Err(HandError::Duplicate(Card::from("As"))));
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(classify(&cards("As Kh Qd Jc")) == Err(HandError::Size(4)));
    }

    #[test]
    fn high_card() {
        let e = eval("As Kh Qd Jc 9s");
        assert!(e.ranking == HandRanking::HighCard);
        assert!(e.ranks[..2] == [Rank::Ace, Rank::King]);
    }

    #[test]
    fn wheel_straight() {
        let e = eval("As 2h 3d 4c 5s");
        assert!(e.ranking == HandRanking::Straight);
        assert!(e.ranks[0] == Rank::Five);
    }

    #[test]
    fn wheel_straight_flush() {
        let e = eval("As 2s 3s 4s 5s");
        assert!(e.ranking == HandRanking::StraightFlush);
        assert!(e.ranks[0] == Rank::Five);
    }

    #[test]
    fn broadway() {
        let e = eval("Ts Jh Qd Kc As");
        assert!(e.ranking == HandRanking::Straight);
        assert!(e.ranks[0] == Rank::Ace);
    }

    #[test]
    fn full_house_degrades_lower_trips() {
        let e = eval("Ks Kh Kd 7c 7s 7h 2d");
        assert!(e.ranking == HandRanking::FullHouse);
        assert!(e.ranks[..2] == [Rank::King, Rank::Seven]);
    }

    #[test]
    fn three_pair_keeps_best_kicker() {
        let e = eval("As Ah Kd Kc Qs Qh Jd");
        assert!(e.ranking == HandRanking::TwoPair);
        assert!(e.ranks[..3] == [Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn quads_take_one_kicker() {
        let e = eval("As Ah Ad Ac Ks Kh Qd");
        assert!(e.ranking == HandRanking::FourOfAKind);
        assert!(e.ranks[..2] == [Rank::Ace, Rank::King]);
        assert!(e.ranks[2..] == [Rank::AceLow; 3]);
    }

    #[test]
    fn flush_beats_straight() {
        let e = eval("4h 6h 7h 8h 9h Ts");
        assert!(e.ranking == HandRanking::Flush);
        assert!(e.ranks[0] == Rank::Nine);
    }

    #[test]
    fn full_house_beats_flush() {
        let e = eval("Kh Ah Ad As Ks Qs Js 9s");
        assert!(e.ranking == HandRanking::FullHouse);
        assert!(e.ranks[..2] == [Rank::Ace, Rank::King]);
    }

    #[test]
    fn set_with_flush_present() {
        let e = eval("Ah Kh Qh Jh 2h 2c 2d");
        assert!(e.ranking == HandRanking::Flush);
        assert!(e.ranks[0] == Rank::Ace);
    }

    #[test]
    fn holdem_is_best_of_seven() {
        let hole = [Card::from("As"), Card::from("Ks")];
        let board = [
            Card::from("Qs"),
            Card::from("Js"),
            Card::from("Ts"),
            Card::from("2h"),
            Card::from("3d"),
        ];
        let e = classify_holdem(&hole, &board).unwrap();
        assert!(e.ranking == HandRanking::StraightFlush);
        assert!(e.ranks[0] == Rank::Ace);
    }

    #[test]
    fn omaha_must_use_two_hole_cards() {
        // nine-card classification would find the heart straight flush;
        // omaha may only take three board cards and has no second heart
        let hole = [
            Card::from("Ah"),
            Card::from("Kd"),
            Card::from("Qd"),
            Card::from("Jd"),
        ];
        let board = [
            Card::from("2h"),
            Card::from("3h"),
            Card::from("4h"),
            Card::from("5h"),
            Card::from("9c"),
        ];
        let e = classify_omaha(&hole, &board).unwrap();
        assert!(e.ranking < HandRanking::Straight);
    }

    #[test]
    fn two_players_share_a_board() {
        use super::super::value::HandValue;
        let board = [
            Card::from("Ts"),
            Card::from("Js"),
            Card::from("Qs"),
            Card::from("2h"),
            Card::from("7d"),
        ];
        let royal = classify_holdem(&[Card::from("As"), Card::from("Ks")], &board).unwrap();
        let pairs = classify_holdem(&[Card::from("2c"), Card::from("7c")], &board).unwrap();
        assert!(royal.ranking == HandRanking::StraightFlush);
        assert!(royal.ranks[0] == Rank::Ace);
        assert!(pairs.ranking == HandRanking::TwoPair);
        assert!(pairs.ranks[..3] == [Rank::Seven, Rank::Two, Rank::Queen]);
        assert!(royal > pairs);
        assert!(HandValue::from(royal) > HandValue::from(pairs));
    }

    #[test]
    fn seeded_showdowns_are_reproducible() {
        use super::super::dealer::Dealer;
        use super::super::evaluator::classify_value;
        use super::super::value::HandValue;
        // dealer -> cards -> classifier -> comparison, end to end: a fixed
        // seed fixes the 9-card deal (2 + 2 hole, 5 board), both classifier
        // paths agree per player and on the players' relative order, and
        // re-dealing from the same seed reproduces everything
        for seed in [0x900d_u64, 0xd00d, 0x3_7777] {
            let nine = Dealer::new(seed).deal(9);
            let board: [Card; 5] = nine[4..].try_into().unwrap();
            let a = classify_holdem(&[nine[0], nine[1]], &board).unwrap();
            let b = classify_holdem(&[nine[2], nine[3]], &board).unwrap();
            let seven = |hole: [Card; 2]| {
                [
                    hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
                ]
            };
            let va = classify_value(&seven([nine[0], nine[1]])).unwrap();
            let vb = classify_value(&seven([nine[2], nine[3]])).unwrap();
            assert!(va == HandValue::from(a));
            assert!(vb == HandValue::from(b));
            assert!(a.cmp(&b) == va.cmp(&vb));
            assert!(Dealer::new(seed).deal(9) == nine);
        }
    }

    #[test]
    fn omaha_counts_double_pairings() {
        let hole = [
            Card::from("As"),
            Card::from("Ad"),
            Card::from("Qs"),
            Card::from("Jd"),
        ];
        let board = [
            Card::from("Ac"),
            Card::from("Kc"),
            Card::from("Kh"),
            Card::from("7s"),
            Card::from("9d"),
        ];
        let e = classify_omaha(&hole, &board).unwrap();
        assert!(e.ranking == HandRanking::FullHouse);
        assert!(e.ranks[..2] == [Rank::Ace, Rank::King]);
    }
}
