//! Детерминированный поток случайных чисел из строкового сида
//!
//! Сид очищается до ASCII-букв и цифр, хешируется FNV-1a и инициализирует `ChaCha8Rng`.
//! Один и тот же сид всегда даёт одну и ту же последовательность.

use std::hash::Hasher;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{GenerationError, Result};

/// Длина случайного сида в байтах до hex-кодирования
const RANDOM_SEED_BYTES: usize = 128;

/// Детерминированный FNV-1a (64 бита). `DefaultHasher` рандомизирован между запусками.
#[derive(Debug)]
struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Оставляет в сиде только ASCII-буквы и цифры
#[must_use]
pub fn sanitize_seed(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Случайный сид: 128 байт из системного генератора в hex
#[must_use]
pub fn random_seed() -> String {
    let mut bytes = [0u8; RANDOM_SEED_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hash_seed(seed: &str) -> u64 {
    let mut hasher = FnvHasher::new();
    hasher.write(seed.as_bytes());
    hasher.finish()
}

/// Поток значений в `[0, 1)`. Каждая точка принятия решения берёт ровно одно значение.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: String,
    rng: ChaCha8Rng,
}

impl SeededRng {
    /// Создаёт генератор из сида; без сида генерирует случайный.
    ///
    /// Сид, в котором после очистки не осталось символов, считается недопустимым.
    pub fn new(seed: Option<&str>) -> Result<Self> {
        let seed = match seed {
            Some(raw) => sanitize_seed(raw),
            None => random_seed(),
        };
        if seed.is_empty() {
            return Err(GenerationError::invalid(
                "seed must contain at least one alphanumeric character",
            ));
        }

        let rng = ChaCha8Rng::seed_from_u64(hash_seed(&seed));
        Ok(Self { seed, rng })
    }

    /// Итоговый (очищенный) сид для логирования и воспроизведения
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// `floor(next * len)`: равномерный индекс в `0..len`. Берёт одно значение.
    pub fn below(&mut self, len: usize) -> usize {
        let value = (self.next_f64() * len as f64).floor() as usize;
        value.min(len.saturating_sub(1))
    }
}
