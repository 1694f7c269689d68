use sha1::{Digest, Sha1};

/// Number of distinct buckets; a bucket index divided by 100 gives a percentage.
const BUCKET_COUNT: i64 = 10_000;

/// Map an evaluation key onto a stable value in `[0, 100)`.
///
/// The value is derived from a SHA-1 digest of the key and nothing else, so a key keeps its
/// bucket across calls, processes and platforms. A key is inside a rollout of `p` percent when
/// its bucket is below `p`.
pub(crate) fn bucket(flag_name: &str, key: &str) -> f64 {
    let mut hash = Sha1::new();
    write_prefix(&mut hash, flag_name);
    hash.update(key.as_bytes());

    let digest = hash.finalize();
    let hexhash = base16ct::lower::encode_string(&digest);

    let hexhash_15 = &hexhash[..15]; // 60 bits, always fits an i64
    let numhash = i64::from_str_radix(hexhash_15, 16).unwrap_or(0);

    (numhash % BUCKET_COUNT) as f64 / 100.0
}

#[cfg(feature = "flag_scoped_bucketing")]
fn write_prefix(hash: &mut Sha1, flag_name: &str) {
    hash.update(flag_name.as_bytes());
    hash.update(b".");
}

#[cfg(not(feature = "flag_scoped_bucketing"))]
fn write_prefix(_hash: &mut Sha1, _flag_name: &str) {}
