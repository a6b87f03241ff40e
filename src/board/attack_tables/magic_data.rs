//! Shipped magic multipliers for the sliding-attack table.
//!
//! Every constant here is collision-free for the relevant-occupancy mask of
//! its square. Regenerate with `cargo run --bin find_magics`.

/// Rook multipliers, indexed by square (a1 = 0).
#[rustfmt::skip]
pub const ROOK_MAGICS: [u64; 64] = [
    0x0a8002c000108020, 0x06c00049b0002001, 0x0100200010090040, 0x2480041000800801,
    0x0280028004000800, 0x0900410008040022, 0x0280020001001080, 0x2880002041000080,
    0xa000800080400034, 0x0004808020004000, 0x2290802004801000, 0x0411000d00100020,
    0x0402800800040080, 0x000b000401004208, 0x2409000100040200, 0x0001002100004082,
    0x0022878001e24000, 0x1090810021004010, 0x0801030040200012, 0x0500808008001000,
    0x0a08018014000880, 0x8000808004000200, 0x0201008080010200, 0x0801020000441091,
    0x0000800080204005, 0x1040200040100048, 0x0000120200402082, 0x0d14880480100080,
    0x0012040280080080, 0x0100040080020080, 0x9020010080800200, 0x0813241200148449,
    0x0491604001800080, 0x0100401000402001, 0x4820010021001040, 0x0400402202000812,
    0x0209009005000802, 0x0810800601800400, 0x4301083214000150, 0x204026458e001401,
    0x0040204000808000, 0x8001008040010020, 0x8410820820420010, 0x1003001000090020,
    0x0804040008008080, 0x0012000810020004, 0x1000100200040208, 0x430000a044020001,
    0x0280009023410300, 0x00e0100040002240, 0x0000200100401700, 0x2244100408008080,
    0x0008000400801980, 0x0002000810040200, 0x8010100228810400, 0x2000009044210200,
    0x4080008040102101, 0x0040002080411d01, 0x2005524060000901, 0x0502001008400422,
    0x489a000810200402, 0x0001004400080a13, 0x4000011008020084, 0x0026002114058042,
];

/// Bishop multipliers, indexed by square (a1 = 0).
#[rustfmt::skip]
pub const BISHOP_MAGICS: [u64; 64] = [
    0x0040011a02220020, 0x041010020141c020, 0x0010808091010110, 0x0009040900a44040,
    0x0025104010008100, 0x0800825041040882, 0x080a080904120000, 0x9000420084200200,
    0x4001980810008202, 0x021004504c004091, 0x01081000a2104400, 0x0004040400808900,
    0x8048120210803001, 0x5000050120120a00, 0x01004200902c3040, 0x0202248208120210,
    0x04c020920c580082, 0x182000020c040084, 0x0008009002801011, 0x0008221404001348,
    0x5804008e10220603, 0x0204082602010400, 0x0401820108011004, 0x000884050401010f,
    0x00202000080b4420, 0x0028040402100202, 0x0401100081004202, 0x0081180009004100,
    0x0448104008044000, 0x420800800a416002, 0x0400860021a23002, 0x0020a4a321040201,
    0x450918224188a000, 0x81a8080c00080988, 0x0007104810040800, 0x1801400a00022200,
    0x1080c40400804100, 0x0002014100020080, 0x0201880200a10116, 0x2408084140050103,
    0x0501100210002288, 0x4241844402022001, 0x009200202800d420, 0x811c110141040801,
    0x5000603600800410, 0x1020600042810441, 0x00181001020040c0, 0x0030020043190840,
    0x0045093002200094, 0x4222021084050425, 0x802002484c100100, 0x0000141020a80900,
    0x2010104002820410, 0x0404400801010185, 0x00c0500a04d10002, 0x0125280801082082,
    0x0005010450048400, 0x1110120082088202, 0x4212100544040400, 0x4007010011048800,
    0x0c20980014208210, 0x0002004902880200, 0x0004102001040092, 0x5620020200440988,
];
