#![allow(dead_code)]

use std::{collections::BTreeMap, fmt::Debug, ops};

use codable::{Decodable, Encodable};
use rand::Rng;
use rand_pcg::Lcg64Xsh32;

/// Encode `input`, decode the result and check it equals `input`.
pub fn assert_round_trip<T>(input: &T)
where T: Decodable + Encodable + Debug + PartialEq {
	let value = codable::to_value(input).unwrap();
	let output: T = codable::from_value(&value).unwrap();
	assert_eq!(&output, input);
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_generate {
	($($ty:ty),*) => {
		$(
			impl Generate for $ty {
				fn generate<R: Rng>(rng: &mut R) -> Self {
					rng.gen()
				}
			}
		)*
	};
}

impl_generate!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, char);

impl Generate for String {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const WORDS: [&str; 8] = [
			"alpha", "", "user_tag", "naïve", "line\nbreak", "\"quoted\"", "🦀", "tab\there",
		];
		WORDS[rng.gen_range(0..WORDS.len())].to_string()
	}
}

impl<T: Generate> Generate for Option<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		if rng.gen_bool(0.5) {
			Some(T::generate(rng))
		} else {
			None
		}
	}
}

impl<T: Generate> Generate for Box<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Box::new(T::generate(rng))
	}
}

pub fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

#[derive(Decodable, Encodable, Clone, Debug, PartialEq)]
pub struct Settings {
	pub volume: f32,
	pub brightness: f64,
	#[coding_key("dark-mode")]
	pub dark_mode: bool,
	#[coding_default]
	pub nickname: Option<String>,
}

impl Generate for Settings {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			volume: rng.gen(),
			brightness: rng.gen(),
			dark_mode: rng.gen_bool(0.5),
			nickname: Generate::generate(rng),
		}
	}
}

#[derive(Decodable, Encodable, Clone, Debug, PartialEq)]
pub struct Account {
	pub id: u64,
	#[coding_key("user_tag")]
	pub tag: String,
	pub initial: char,
	pub balance: i64,
	pub age: u8,
	pub offset: i16,
	pub settings: Box<Settings>,
	pub friends: Vec<u32>,
	pub scores: BTreeMap<String, i32>,
	#[coding_default(Vec::new())]
	pub history: Vec<Option<i8>>,
}

impl Generate for Account {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		let scores = (0..rng.gen_range(0..4))
			.map(|i| (format!("game{}", i), rng.gen()))
			.collect();
		Self {
			id: rng.gen(),
			tag: Generate::generate(rng),
			initial: rng.gen(),
			balance: rng.gen(),
			age: rng.gen(),
			offset: rng.gen(),
			settings: Generate::generate(rng),
			friends: generate_vec(rng, 0..10),
			scores,
			history: generate_vec(rng, 0..5),
		}
	}
}

#[derive(Decodable, Encodable, Clone, Debug, PartialEq)]
pub struct Directory {
	pub accounts: Vec<Account>,
}

pub fn generate_directory(accounts: usize) -> Directory {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);

	Directory {
		accounts: generate_vec(&mut rng, accounts..accounts + 1),
	}
}
