//! Standard MIDI File rendering of a cleaned sequence.
//!
//! Each base becomes one note-on/note-off pair using the fixed pitch map
//! (A=60, T=62, C=64, G=67), preceded by a program-change event for the
//! selected instrument and a tempo meta event derived from the BPM. The
//! emitter writes a single-track file with 480 ticks per beat.

use std::io::Write;

use crate::constants::{
    instrument_name, note_for_base, MICROSECONDS_PER_MINUTE, NOTE_DURATION_TICKS, NOTE_VELOCITY,
    TICKS_PER_BEAT,
};
use crate::results::MelodyResults;
use crate::types::MelodyError;

/// Largest tempo value representable in a 3-byte set_tempo payload.
const MAX_TEMPO_US: u32 = 0x00FF_FFFF;

/// Appends a variable-length-quantity encoded delta time.
fn push_vlq(buf: &mut Vec<u8>, mut value: u32) {
    let mut bytes = [0u8; 5];
    let mut n = 0;
    loop {
        bytes[n] = (value & 0x7F) as u8;
        value >>= 7;
        n += 1;
        if value == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        let continuation = if i > 0 { 0x80 } else { 0 };
        buf.push(bytes[i] | continuation);
    }
}

/// Write results as a Standard MIDI File melody
pub fn write_midi_format<W: Write>(
    writer: &mut W,
    results: &MelodyResults,
    bpm: u32,
    program: u8,
) -> Result<(), MelodyError> {
    if instrument_name(program).is_none() {
        return Err(MelodyError::InvalidInstrument(program));
    }
    if bpm == 0 {
        return Err(MelodyError::InvalidTempo(bpm));
    }
    // The set_tempo payload is 3 bytes; very low BPM values saturate it.
    let tempo_us = (MICROSECONDS_PER_MINUTE / bpm).min(MAX_TEMPO_US);

    let mut track = Vec::new();

    // program_change on channel 0
    push_vlq(&mut track, 0);
    track.extend([0xC0, program]);

    // set_tempo meta event
    push_vlq(&mut track, 0);
    track.extend([0xFF, 0x51, 0x03]);
    track.extend(&tempo_us.to_be_bytes()[1..4]);

    // One note-on/note-off pair per base
    for base in results.sequence.bases() {
        if let Some(note) = note_for_base(base) {
            push_vlq(&mut track, 0);
            track.extend([0x90, note, NOTE_VELOCITY]);
            push_vlq(&mut track, NOTE_DURATION_TICKS);
            track.extend([0x80, note, NOTE_VELOCITY]);
        }
    }

    // end_of_track meta event
    push_vlq(&mut track, 0);
    track.extend([0xFF, 0x2F, 0x00]);

    // Header chunk: format 1, one track, fixed division
    writer.write_all(b"MThd")?;
    writer.write_all(&6u32.to_be_bytes())?;
    writer.write_all(&1u16.to_be_bytes())?;
    writer.write_all(&1u16.to_be_bytes())?;
    writer.write_all(&TICKS_PER_BEAT.to_be_bytes())?;

    // Track chunk
    writer.write_all(b"MTrk")?;
    writer.write_all(&(track.len() as u32).to_be_bytes())?;
    writer.write_all(&track)?;

    Ok(())
}
