//! Write a small three-channel `.mlf` file.
//!
//! The encoder produces bytes; this example owns the file I/O, writing the
//! header first and then one full cycle of samples.

use std::fs::File;
use std::io::Write;

use bytes::BytesMut;
use mlf::{Channel, ChannelType, CivilTime, DateTime, Epoch, LogEncoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut encoder = LogEncoder::new(vec![
        Channel::new("Channel Time", ChannelType::DateTime),
        Channel::new("Channel INT32", ChannelType::Int32),
        Channel::new("Channel FLOAT32", ChannelType::Float32),
    ])?;

    let mut file = File::create("test.mlf")?;
    let mut buf = BytesMut::with_capacity(encoder.header_size());

    let header_bytes = encoder.write_header(&mut buf)?;
    file.write_all(&buf)?;
    buf.clear();

    // Timestamp channel: a civil wall-clock reading converted under the
    // default Unix epoch, with a microsecond fraction.
    let stamp = DateTime::from_civil(
        Epoch::UNIX,
        CivilTime::new(2024, 6, 1, 12, 30, 0),
        250_000,
    )?;
    encoder.encode_sample(stamp.into(), &mut buf)?;
    encoder.encode_sample(123_456i32.into(), &mut buf)?;
    encoder.encode_sample(123.456f32.into(), &mut buf)?;
    file.write_all(&buf)?;

    println!(
        "wrote {} header bytes and {} sample bytes to test.mlf",
        header_bytes,
        buf.len()
    );
    Ok(())
}
