use crate::crypto::cipher_types::CipherOutput;
use std::fs::File;
use std::io::{BufWriter, Write};

pub(crate) fn write_all(output: &mut CipherOutput, data: &[u8]) -> std::io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            buffer.extend_from_slice(data);
            Ok(())
        }
        CipherOutput::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()
        }
    }
}
