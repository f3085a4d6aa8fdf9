//! Encrypts one block under each key size and prints the FIPS-197 round trace
//! for the AES-128 case.

use rijndael_core::{KeySize, Rijndael, TraceRecorder};

fn main() {
    let block = *b"first block here";

    for size in KeySize::ALL {
        let key: Vec<u8> = (0..size.bytes() as u8).collect();
        let cipher = Rijndael::new(&key).expect("key length comes from KeySize");
        let ct = cipher.encrypt_block(&block);
        assert_eq!(cipher.decrypt_block(&ct), block);
        println!("AES-{}: {}", size.bits(), hex::encode(ct));
    }

    let cipher = Rijndael::new(&[0u8; 16]).expect("16-byte key");
    let mut recorder = TraceRecorder::new();
    cipher.encrypt_block_with(&block, &mut recorder);
    print!("{}", recorder.render());
}
