//! Compares `SimpleVector` with `Vec` and `SmallVec` on the basic operations.

use core::hint;
use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use simplevec::SimpleVector;
use smallvec::SmallVec;

use rand::Rng;

const SMALL_SIZE: usize = 16;
const LARGE_SIZE: usize = 40000;

/// A function used to generate a random amount of data.
///
/// Random inputs keep the compiler from specializing on known sizes.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// Generate an array of random content of a specified length.
#[inline(never)]
fn gen_rand(len: usize, start: u64, end: u64) -> Box<[u64]> {
    let mut rng = rand::rng();
    let mut vec: Vec<u64> = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(rng.random_range(start..end));
    }
    vec.into_boxed_slice()
}

/// An initialization tool for vector like type.
trait VecLike {
    fn new_empty() -> Self;
    fn new_large() -> Self;
    fn accessor(&mut self) -> impl Accessor<'_>;
}

/// A data manipulation tool for vectors.
///
/// `SimpleVector` does not hand back popped or erased values, so the
/// shared interface discards them for every container.
trait Accessor<'a> {
    fn push(&mut self, value: u64);
    fn pop(&mut self);
    fn insert(&mut self, index: usize, value: u64);
    fn remove(&mut self, index: usize);
    fn get_mut(&mut self, index: usize) -> &mut u64;
    /// Used for quickly setting vector contents during testing.
    fn resize(&mut self, len: usize);
}

macro_rules! impl_std_like {
    ($name:ty) => {
        impl VecLike for $name {
            #[inline(always)]
            fn new_empty() -> Self {
                Self::new()
            }
            #[inline(always)]
            fn new_large() -> Self {
                Self::with_capacity(LARGE_SIZE)
            }
            #[inline(always)]
            fn accessor(&mut self) -> impl Accessor<'_> {
                self
            }
        }

        impl<'a> Accessor<'a> for &'a mut $name {
            #[inline(always)]
            fn push(&mut self, value: u64) {
                (*self).push(value)
            }
            #[inline(always)]
            fn pop(&mut self) {
                hint::black_box((*self).pop());
            }
            #[inline(always)]
            fn insert(&mut self, index: usize, value: u64) {
                (*self).insert(index, value);
            }
            #[inline(always)]
            fn remove(&mut self, index: usize) {
                hint::black_box((*self).remove(index));
            }
            #[inline(always)]
            fn get_mut(&mut self, index: usize) -> &mut u64 {
                &mut (*self)[index]
            }
            #[inline(always)]
            fn resize(&mut self, len: usize) {
                (*self).resize(len, 0);
            }
        }
    };
}

impl_std_like!(Vec<u64>);
impl_std_like!(SmallVec<u64, SMALL_SIZE>);

impl VecLike for SimpleVector<u64> {
    #[inline(always)]
    fn new_empty() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn new_large() -> Self {
        Self::with_capacity(LARGE_SIZE)
    }
    #[inline(always)]
    fn accessor(&mut self) -> impl Accessor<'_> {
        self
    }
}

impl<'a> Accessor<'a> for &'a mut SimpleVector<u64> {
    #[inline(always)]
    fn push(&mut self, value: u64) {
        (*self).push_back(value)
    }
    #[inline(always)]
    fn pop(&mut self) {
        (*self).pop_back();
    }
    #[inline(always)]
    fn insert(&mut self, index: usize, value: u64) {
        (*self).insert(index, value);
    }
    #[inline(always)]
    fn remove(&mut self, index: usize) {
        (*self).erase(index);
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> &mut u64 {
        &mut (*self)[index]
    }
    #[inline(always)]
    fn resize(&mut self, len: usize) {
        (*self).resize(len);
    }
}

macro_rules! gen_bench_group {
    ($c:ident => $fn_name:ident) => {{
        let mut group_new = $c.benchmark_group(stringify!($fn_name));
        group_new.bench_function("Vec", |b| $fn_name::<Vec<u64>>(b));
        group_new.bench_function("SimpleVector", |b| $fn_name::<SimpleVector<u64>>(b));
        group_new.bench_function("SmallVec", |b| $fn_name::<SmallVec<u64, SMALL_SIZE>>(b));
    }};
}

fn bench_vec(c: &mut Criterion) {
    gen_bench_group!(c => new_empty);
    gen_bench_group!(c => new_large);
    gen_bench_group!(c => push_large);
    gen_bench_group!(c => push_large_from_empty);
    gen_bench_group!(c => pop_large);
    gen_bench_group!(c => insert_small);
    gen_bench_group!(c => remove_small);
    gen_bench_group!(c => index_large);
}

/// Test The creation time of empty vector.
#[inline(never)]
fn new_empty<T: VecLike>(b: &mut Bencher) {
    b.iter(|| hint::black_box(T::new_empty()));
}

/// Test The creation time of vector with capacity `40000`.
///
/// `SimpleVector` also constructs every slot, so it is expected to trail here.
#[inline(never)]
fn new_large<T: VecLike>(b: &mut Bencher) {
    b.iter(|| hint::black_box(T::new_large()));
}

/// Pre allocate capacity and only test the efficiency of `push`.
#[inline(never)]
fn push_large<T: VecLike>(b: &mut Bencher) {
    let mut vec = T::new_large();
    let mut op = vec.accessor();
    let data = gen_rand(gen_one(36000, 36003), 0, 9999);

    b.iter(|| {
        for item in &data {
            op.push(*item);
        }
        let res = hint::black_box(*op.get_mut(data.len() / 2));
        op.resize(0);
        res
    });
}

/// Test `push` including every doubling reallocation.
#[inline(never)]
fn push_large_from_empty<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(gen_one(36000, 36003), 0, 9999);

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut op = vec.accessor();
        for item in &data {
            op.push(*item);
        }
        hint::black_box(*op.get_mut(0))
    });
}

/// Test `pop` efficient, will not reallocate memory.
#[inline(never)]
fn pop_large<T: VecLike>(b: &mut Bencher) {
    let mut vec = T::new_large();
    let mut op = vec.accessor();
    let len = gen_one(36000, 36003);

    b.iter(|| {
        op.resize(len);
        for _ in 0..len {
            op.pop();
        }
    });
}

/// Test `insert` at random positions of a short vector.
#[inline(never)]
fn insert_small<T: VecLike>(b: &mut Bencher) {
    let mut vec = T::new_empty();
    let mut op = vec.accessor();
    let len = gen_one(SMALL_SIZE - 2, SMALL_SIZE);
    let positions = gen_rand(len, 0, 9999);

    b.iter(|| {
        op.resize(0);
        for (i, pos) in positions.iter().enumerate() {
            op.insert((*pos as usize) % (i + 1), i as u64);
        }
        hint::black_box(*op.get_mut(0))
    });
}

/// Test `remove`/`erase` from the front of a short vector.
#[inline(never)]
fn remove_small<T: VecLike>(b: &mut Bencher) {
    let mut vec = T::new_empty();
    let mut op = vec.accessor();
    let len = gen_one(SMALL_SIZE - 2, SMALL_SIZE);

    b.iter(|| {
        op.resize(len);
        for _ in 0..len {
            op.remove(0);
        }
    });
}

/// Test `index` efficient, will not reallocate memory.
#[inline(never)]
fn index_large<T: VecLike>(b: &mut Bencher) {
    let mut vec = T::new_large();
    let mut op = vec.accessor();
    op.resize(36000);

    let index = gen_one(0, 36000);
    let range = gen_rand(2000, 0, 36000);

    b.iter(|| {
        let mut counter = 0u64;
        for item in &range {
            *op.get_mut(*item as usize) += *item;
        }
        counter += *op.get_mut(index);
        hint::black_box(counter)
    });
    op.resize(0);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(200)
        .warm_up_time(core::time::Duration::from_secs(3))
        .measurement_time(core::time::Duration::from_secs(8))
        .confidence_level(0.96)
        .noise_threshold(0.04);
    targets = bench_vec,
}
criterion_main!(benches);
