// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use thiserror::Error;

pub const AES256_KEY_SIZE: usize = 32;

pub const AES_BLOCK_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcbError {
    #[error("aes-ecb: invalid data length")]
    InvalidDataLength,
}

/// AES-256 in ECB mode without padding, operating in place on block-aligned buffers.
pub trait Aes256EcbCipher {
    fn aes256_ecb_encrypt_aligned(&self, buf: &mut [u8]) -> Result<(), EcbError>;

    fn aes256_ecb_decrypt_aligned(&self, buf: &mut [u8]) -> Result<(), EcbError>;
}

impl Aes256EcbCipher for [u8; AES256_KEY_SIZE] {
    fn aes256_ecb_encrypt_aligned(&self, data: &mut [u8]) -> Result<(), EcbError> {
        if data.len() % AES_BLOCK_SIZE != 0 {
            return Err(EcbError::InvalidDataLength);
        }

        let cipher = Aes256::new(GenericArray::from_slice(self));
        data.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.encrypt_block(block));
        Ok(())
    }

    fn aes256_ecb_decrypt_aligned(&self, data: &mut [u8]) -> Result<(), EcbError> {
        if data.len() % AES_BLOCK_SIZE != 0 {
            return Err(EcbError::InvalidDataLength);
        }

        let cipher = Aes256::new(GenericArray::from_slice(self));
        data.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.decrypt_block(block));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    // FIPS-197 appendix C.3
    const KEY: [u8; 32] = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    const PLAIN: [u8; 16] = hex!("00112233445566778899aabbccddeeff");
    const CIPHER: [u8; 16] = hex!("8ea2b7ca516745bfeafc49904b496089");

    #[test]
    fn test_aes256_ecb_known_answer() {
        let mut data = PLAIN;
        KEY.aes256_ecb_encrypt_aligned(&mut data).expect("encrypt should be ok");
        assert_eq!(data, CIPHER);

        KEY.aes256_ecb_decrypt_aligned(&mut data).expect("decrypt should be ok");
        assert_eq!(data, PLAIN);
    }

    #[test]
    fn test_aes256_ecb_blocks_are_independent() {
        let mut data = [PLAIN, PLAIN].concat();
        KEY.aes256_ecb_encrypt_aligned(&mut data).expect("encrypt should be ok");
        assert_eq!(data[..16], CIPHER);
        assert_eq!(data[16..], CIPHER);
    }

    #[test]
    fn test_aes256_ecb_rejects_unaligned() {
        let mut data = *b"Hello world!";
        assert_eq!(
            KEY.aes256_ecb_encrypt_aligned(&mut data),
            Err(EcbError::InvalidDataLength)
        );
        assert_eq!(
            KEY.aes256_ecb_decrypt_aligned(&mut data),
            Err(EcbError::InvalidDataLength)
        );
    }
}
