use finfield::{BinaryFiniteField, Field};

/// AES S-box: inversion in GF(2^8) followed by the affine map.
fn sbox(field: &BinaryFiniteField, byte: u8) -> u8 {
    let e = field.element_from_bits(u32::from(byte));
    let inv = if e.is_zero() { e } else { e.inverse().unwrap() };
    let b = field.bits_from_element(&inv).unwrap() as u8;
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

fn main() {
    let field = BinaryFiniteField::standard(8).unwrap();
    println!("field: {} modulo {}", field, field.irreducible());

    let a = field.element_from_bytes(&[0x57]).unwrap();
    let b = field.element_from_bytes(&[0x83]).unwrap();
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", &a + &b);
    println!("a * b = {:02x?}", field.bytes_from_element(&(&a * &b)).unwrap());
    println!("a^-1 = {}", a.inverse().unwrap());

    println!();
    println!("S-box:");
    for row in 0..16u8 {
        let line: Vec<String> = (0..16u8)
            .map(|col| format!("{:02x}", sbox(&field, row << 4 | col)))
            .collect();
        println!("  {}", line.join(" "));
    }
}
