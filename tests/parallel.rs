//! Disjoint sub-ranges can be transferred concurrently with no coordination.

use rayon::prelude::*;
use zensample::{CompositeOp, ConversionTables, Direct, LutConfig, composite, transfer};

const CHUNK: usize = 4096;

fn ramp(len: usize) -> Vec<u16> {
    (0..len).map(|i| (i * 7919 % 65536) as u16).collect()
}

#[test]
fn parallel_copy_matches_serial() {
    let src = ramp(1 << 18);
    let tables = ConversionTables::global();

    let mut serial = vec![0.0f32; src.len()];
    transfer::copy(&mut serial, &src, tables);

    let mut parallel = vec![0.0f32; src.len()];
    parallel
        .par_chunks_mut(CHUNK)
        .zip(src.par_chunks(CHUNK))
        .for_each(|(dst, src)| transfer::copy(dst, src, tables));

    assert_eq!(serial, parallel);
}

#[test]
fn parallel_get_and_accumulate_match_serial() {
    let src = ramp(100_003);
    let tables = ConversionTables::new(LutConfig::minimal());
    let tables = &tables;

    let mut serial = vec![0i16; src.len()];
    transfer::get(&mut serial, &src, tables);
    let mut parallel = vec![0i16; src.len()];
    parallel
        .par_chunks_mut(CHUNK)
        .zip(src.par_chunks(CHUNK))
        .for_each(|(dst, src)| transfer::get(dst, src, tables));
    assert_eq!(serial, parallel);

    let mut serial = vec![0.5f64; src.len()];
    transfer::copy_max(&mut serial, &src, Direct);
    let mut parallel = vec![0.5f64; src.len()];
    parallel
        .par_chunks_mut(CHUNK)
        .zip(src.par_chunks(CHUNK))
        .for_each(|(dst, src)| transfer::copy_max(dst, src, Direct));
    assert_eq!(serial, parallel);
}

#[test]
fn parallel_composite_matches_serial() {
    let src: Vec<f32> = (0..50_000).map(|i| (i % 1000) as f32 / 999.0).collect();
    let base: Vec<u8> = (0..50_000).map(|i| (i % 256) as u8).collect();
    let tables = ConversionTables::global();

    for op in [CompositeOp::Screen, CompositeOp::Overlay, CompositeOp::Xor, CompositeOp::Add] {
        let mut serial = base.clone();
        composite::apply_slice(op, &mut serial, &src, tables);
        let mut parallel = base.clone();
        parallel
            .par_chunks_mut(CHUNK)
            .zip(src.par_chunks(CHUNK))
            .for_each(|(dst, src)| composite::apply_slice(op, dst, src, tables));
        assert_eq!(serial, parallel, "{op}");
    }
}

#[test]
fn global_tables_initialize_once_under_contention() {
    let ptrs: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|_| ConversionTables::global() as *const ConversionTables as usize)
        .collect();
    assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
}
