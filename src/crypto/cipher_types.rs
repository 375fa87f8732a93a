pub enum CipherInput {
    Bytes(Vec<u8>),
    File(String),
}

pub enum CipherOutput {
    Buffer(Box<Vec<u8>>),
    File(String),
}
