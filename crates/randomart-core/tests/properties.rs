use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randomart_core::prelude::*;

fn random_data(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0..64);
    (0..len).map(|_| rng.gen()).collect()
}

fn random_bounds(rng: &mut StdRng) -> Bounds {
    Bounds::new(rng.gen_range(1..32), rng.gen_range(1..32)).unwrap()
}

#[test]
fn deterministic() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..100 {
        let data = random_data(&mut rng);
        let options = Options::default().with_bounds(random_bounds(&mut rng));
        assert_eq!(fingerprint(&data, &options), fingerprint(&data, &options));
    }
}

#[test]
fn shape_follows_bounds() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let data = random_data(&mut rng);
        let bounds = random_bounds(&mut rng);
        let art = fingerprint(&data, &Options::default().with_bounds(bounds));
        let lines: Vec<&str> = art.split('\n').collect();
        assert_eq!(lines.len(), bounds.height(), "art:\n{}", art);
        for line in lines {
            assert_eq!(line.chars().count(), bounds.width(), "art:\n{}", art);
        }
    }
}

#[test]
fn exactly_one_end() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let data = random_data(&mut rng);
        let art = fingerprint(&data, &Options::default());
        assert_eq!(art.matches('E').count(), 1, "art:\n{}", art);
    }
}

#[test]
fn walk_stays_on_the_board() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let data = random_data(&mut rng);
        let bounds = random_bounds(&mut rng);
        let board = Board::generate(&data, bounds);
        let (x, y) = board.end();
        assert!(x < bounds.width() && y < bounds.height());
        assert_eq!(board.get(x, y), Some(END));
    }
}

#[test]
fn empty_input_only_has_end() {
    let art = fingerprint(&[], &Options::default());
    let lines: Vec<&str> = art.split('\n').collect();
    for (y, line) in lines.iter().enumerate() {
        for (x, c) in line.chars().enumerate() {
            if (x, y) == (8, 4) {
                assert_eq!(c, 'E');
            } else {
                assert_eq!(c, ' ');
            }
        }
    }
}

#[test]
fn long_and_repeated_input_accepted() {
    let zeros = vec![0_u8; 4096];
    let art = fingerprint(&zeros, &Options::default());
    // every step goes up-left, the walk piles up in the corner
    assert!(art.starts_with('E'));

    let board = Board::generate(&[0xaa; 1000], Bounds::default());
    // 0xaa is always down-left
    assert_eq!(board.end(), (0, 8));
}

#[test]
fn custom_symbols_fall_back_to_empty() {
    let symbols = SymbolTable::empty()
        .with(EMPTY, '.')
        .with(START, 's')
        .with(END, 'e');
    let art = fingerprint(&[0x00], &Options::default().with_symbols(symbols));
    // visited cells have no symbol and draw as empty
    assert_eq!(art.matches('.').count(), 17 * 9 - 2);
    assert_eq!(art.matches('s').count(), 1);
    assert_eq!(art.matches('e').count(), 1);
}
