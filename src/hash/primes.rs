//! The 97-entry prime table indexed by mixer call auxiliaries (spec §3,
//! §4.D). The list is fixed and reproduced verbatim; it is part of the wire
//! contract, not a tuning parameter.

pub(crate) const PRIMES: [u32; 97] = [
    145403341, 66068741, 2749919, 27290089, 34185863, 37667459, 95188969, 13833949, 67867831,
    71479897, 78736303, 55316783, 162373177, 141650737, 149163137, 82375961, 22182247, 126673831,
    23879353, 12195067, 108092819, 109938481, 18815059, 60677941, 41161511, 171834121, 177525619,
    143522779, 160481023, 62472941, 80556551, 20495749, 10570697, 98866763, 69672541, 25582019,
    53533379, 32452657, 84200113, 48210583, 30723547, 75103313, 113648273, 179424551, 91518881,
    147280787, 97026073, 46441099, 121086289, 168048611, 7368631, 137896123, 64268657, 8960299,
    139772119, 76918057, 122949667, 87857347, 130408657, 104395003, 158594087, 166158541,
    29005411, 5799961, 73289599, 154819559, 134150869, 128541643, 106244773, 102551369,
    175628303, 117363863, 169941001, 164262793, 111794677, 100711231, 58885829, 93354587,
    1299553, 132276563, 57099149, 115507703, 152935751, 15485761, 136023631, 49979591, 39410737,
    44680193, 119226883, 86027987, 173729729, 51754847, 156703873, 124811003, 42919973, 89687537,
    35926171,
];
