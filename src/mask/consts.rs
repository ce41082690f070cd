//! Masking constants shared by the transform implementations.
//!
//! Grid sizes, XOR values and the Win transform table come from the
//! original GMask masks; the Meko and CP key tables are the fixed keys
//! this engine permutes cells with.

/// Base grid size in pixels. Selections are snapped to this grid.
pub const GRID_SIZE: u32 = 8;

/// Double grid (cell) size in pixels, used by Win, Meko and CP.
pub const GRID_SIZE_DOUBLE: u32 = 16;

/// XOR value of the `xor` action.
pub const XOR: u8 = 0x80;

/// XOR value of the `neg` action (full negation).
pub const NEG: u8 = 0xff;

/// Win transform table: swap targets for the first 11 offsets of every
/// 16px column. The swap sequence composes to an involution, which is what
/// makes `win` self-inverse (covered by test, not taken on faith).
pub const WIN_XFORM: [usize; 11] = [12, 8, 6, 15, 9, 13, 6, 11, 8, 9, 14];

/// Longest accepted CP code, in raw (pre-normalization) characters.
pub const MAX_CODE_LEN: usize = 64;

/// Per-letter key material for the CP slot walk, indexed by `letter - 'A'`.
pub const CP_KEY: [usize; 26] = [
    19, 78, 79, 79, 65, 27, 78, 15, 16, 76, 66, 55, 62,
    5, 72, 88, 91, 69, 7, 56, 58, 86, 49, 34, 68, 19,
];

/// Per-cell key material for the Meko permutation. One entry per cell
/// index; the table bounds the largest cell grid Meko can permute
/// (1024 cells, a 512x512px selection at the default cell size).
pub const MEKO_KEY: [u16; 1024] = [
    12115, 38765, 9326, 54797, 59378, 49006, 53143, 61888, 59338, 38471, 60060, 40477,
    11547, 64096, 21212, 22655, 51029, 41983, 30904, 39117, 3334, 10037, 62617, 6559,
    19506, 6037, 57990, 23834, 57131, 34128, 6730, 57507, 14310, 1834, 34057, 1488,
    17523, 37801, 8334, 44620, 27560, 5308, 52619, 56828, 59900, 51271, 29386, 53549,
    64585, 44433, 1710, 36870, 54431, 605, 56165, 37133, 1349, 60799, 21678, 47910,
    35283, 49607, 63577, 47805, 41747, 56536, 41919, 51226, 20784, 55986, 42959, 58732,
    49604, 12684, 26911, 60525, 24733, 16110, 11700, 49853, 63077, 60728, 27805, 49431,
    55038, 65428, 22259, 19053, 52402, 35029, 40613, 30124, 43056, 9626, 42656, 52532,
    28188, 6632, 16624, 52082, 19840, 22161, 36567, 57347, 54558, 1705, 1308, 25165,
    15395, 28950, 21919, 13789, 8722, 40456, 65254, 38505, 7857, 15370, 25445, 62628,
    4839, 7464, 15502, 17618, 61475, 45887, 51384, 21287, 28244, 39184, 44436, 34426,
    37252, 11695, 37912, 18052, 44052, 1875, 59082, 27306, 37159, 50753, 30288, 62651,
    25259, 10216, 40655, 33472, 23830, 23087, 15181, 4665, 15646, 56980, 13700, 577,
    7494, 26119, 12930, 51088, 47810, 49044, 26462, 1440, 45342, 5545, 3345, 43886,
    14075, 36066, 36557, 11727, 9865, 27446, 50267, 57276, 51582, 55685, 9309, 21158,
    54037, 46686, 3963, 65377, 5386, 17459, 12440, 11371, 7911, 49695, 9839, 13503,
    50844, 8516, 4548, 15052, 541, 52597, 9077, 29814, 10060, 30588, 40485, 35529,
    31450, 52906, 18540, 22574, 62353, 58545, 45214, 51494, 61532, 23607, 61387, 29223,
    59940, 17656, 44976, 16086, 44649, 15093, 29339, 10539, 37450, 53382, 46706, 29736,
    11631, 17654, 14077, 18391, 40724, 55326, 45374, 23782, 33620, 1384, 55637, 44382,
    39800, 14668, 25253, 32188, 31687, 5617, 51558, 40711, 29657, 20128, 8715, 36343,
    12294, 3127, 65327, 17625, 12576, 41362, 31960, 60197, 35833, 64673, 31547, 59258,
    7126, 25773, 12016, 44583, 60232, 32227, 18709, 52341, 3586, 28208, 30665, 22794,
    42529, 26594, 5832, 27367, 53255, 64434, 33323, 25778, 5167, 7914, 50620, 42350,
    2744, 6106, 48687, 61023, 9646, 34796, 6459, 8367, 64065, 11736, 838, 4555,
    29631, 4704, 31234, 8964, 2581, 34681, 10849, 28391, 31875, 26777, 14821, 9490,
    53514, 15263, 49363, 46655, 42570, 4967, 1984, 28741, 47020, 59596, 8029, 29556,
    62153, 50878, 30191, 33889, 64234, 11204, 42138, 61811, 13160, 30756, 14298, 18141,
    58101, 61767, 45833, 37990, 50541, 1993, 10883, 28606, 20420, 63127, 33736, 23555,
    24097, 55918, 4407, 61840, 10097, 9723, 2388, 52329, 3141, 30729, 58511, 62731,
    31640, 48732, 38526, 5593, 22889, 26507, 3302, 35470, 33340, 17975, 22924, 15219,
    10857, 44861, 4770, 44945, 53155, 51508, 43400, 44916, 3124, 28142, 61229, 46607,
    6918, 28713, 2148, 34788, 63909, 35866, 35512, 15635, 65055, 60497, 17012, 32586,
    39826, 60218, 51949, 34574, 23969, 55617, 64815, 1220, 9555, 46121, 26733, 26018,
    17601, 47303, 43523, 45746, 41837, 55067, 57911, 32348, 13916, 27450, 14281, 31010,
    63641, 18514, 31200, 10520, 1992, 45008, 5698, 35787, 41929, 23016, 29603, 56970,
    32267, 35811, 53572, 11456, 54791, 51613, 15243, 26626, 24120, 29211, 34676, 47114,
    48287, 49986, 53522, 921, 64753, 2920, 14271, 61933, 48531, 62686, 4657, 2236,
    46952, 12658, 37008, 2585, 37243, 56902, 30370, 53435, 42810, 11942, 917, 5620,
    61594, 1116, 6972, 42843, 1363, 4230, 18878, 41177, 49601, 52447, 6145, 14213,
    49737, 63926, 37167, 6647, 927, 39472, 31466, 33287, 17384, 58888, 20999, 55169,
    31077, 11877, 44312, 48921, 15353, 33918, 16449, 1954, 55984, 37932, 59020, 39376,
    36715, 685, 58035, 51001, 55850, 51723, 57080, 52569, 5748, 37192, 43784, 37817,
    51882, 26591, 18393, 61136, 1812, 58436, 31917, 45387, 37490, 37244, 63537, 30861,
    26499, 40953, 40062, 13440, 26055, 13578, 54014, 28456, 64333, 5157, 38893, 25787,
    44817, 59692, 29501, 39394, 11457, 1218, 41256, 9188, 65399, 10587, 15731, 5202,
    55621, 37435, 44630, 33207, 56857, 53595, 5092, 56659, 9492, 54426, 62663, 55348,
    28669, 45804, 35693, 19133, 3541, 33338, 24476, 52460, 54752, 49506, 17026, 65152,
    1177, 12974, 27824, 30826, 12799, 19010, 15431, 6978, 44886, 64297, 42968, 37405,
    55297, 61401, 8489, 45686, 24044, 63049, 57501, 7398, 53781, 5126, 31796, 29350,
    8144, 11311, 37831, 60606, 18633, 18189, 11788, 17291, 52062, 20021, 61619, 57532,
    15208, 53336, 16151, 31302, 39678, 41789, 15612, 562, 59800, 53389, 55108, 28832,
    13215, 9655, 22909, 46135, 58148, 9231, 11438, 16781, 53597, 49215, 48069, 54977,
    62742, 3064, 37555, 28474, 40232, 59641, 15067, 57547, 4681, 63354, 1497, 60232,
    27474, 33964, 17574, 57087, 17769, 5767, 2627, 32735, 7864, 36550, 10223, 42203,
    61805, 56221, 61083, 61818, 8488, 23358, 42118, 24408, 56147, 54643, 24002, 40425,
    4353, 20140, 9601, 31635, 45050, 59749, 51218, 7396, 58949, 50370, 3413, 21072,
    42234, 46356, 4036, 42592, 14855, 22709, 36143, 7901, 60703, 42236, 33841, 29943,
    8951, 51523, 41960, 18682, 47832, 61553, 52107, 36693, 2382, 6726, 54622, 61242,
    41193, 2958, 55303, 56243, 867, 10634, 3182, 37018, 38728, 41742, 12235, 9260,
    58302, 51031, 41279, 4059, 34103, 13732, 2818, 29734, 64325, 1383, 8777, 19300,
    43662, 3789, 16895, 52229, 57760, 56558, 5473, 11959, 19854, 19538, 56688, 60282,
    54529, 56137, 48864, 5952, 29420, 31599, 22217, 43740, 31853, 52856, 22879, 53029,
    7545, 15898, 23066, 46482, 53331, 27125, 47434, 6430, 55343, 26364, 63064, 1549,
    60101, 16361, 20181, 27759, 26643, 27738, 49485, 8351, 47450, 41292, 25838, 29656,
    331, 35829, 28857, 40226, 29692, 5034, 17566, 21169, 47677, 30020, 58638, 51453,
    53111, 42154, 10480, 55845, 33949, 26012, 702, 5906, 9507, 38449, 44094, 25389,
    45578, 45494, 39074, 52107, 10751, 27716, 51072, 59903, 24537, 1019, 14321, 27883,
    6086, 34284, 55382, 25559, 61623, 57769, 24318, 16216, 29170, 20852, 6405, 5337,
    45368, 14944, 40907, 32839, 19021, 39281, 4593, 14673, 3349, 49497, 22815, 23255,
    2528, 52807, 31513, 8944, 20784, 58643, 3649, 18040, 22092, 13067, 7645, 4094,
    14030, 14870, 34719, 60447, 6070, 23357, 19734, 22062, 39311, 27609, 34791, 11200,
    4142, 34642, 9884, 54554, 9098, 13712, 63764, 43804, 56427, 48976, 40227, 12180,
    23185, 8686, 10875, 35638, 50796, 26366, 54966, 39354, 63353, 15103, 34532, 21895,
    16577, 44603, 24673, 16429, 18537, 12588, 51608, 36449, 50366, 20008, 51, 64322,
    36480, 21028, 57640, 21970, 58689, 39307, 24675, 62949, 27678, 52953, 36606, 54442,
    12617, 14651, 44305, 19525, 12944, 35522, 49181, 10454, 3801, 37589, 52583, 48848,
    58595, 51842, 57629, 16722, 44004, 43845, 15562, 49472, 30858, 8964, 62547, 17848,
    38190, 2870, 43116, 834, 6619, 16781, 55979, 20891, 51404, 51663, 3335, 26532,
    41680, 10948, 49276, 20403, 57393, 17904, 19132, 51792, 64915, 17437, 56230, 54885,
    35738, 22810, 42248, 41637, 23417, 51278, 13006, 28329, 64682, 61909, 7708, 21035,
    53460, 47736, 43687, 47682, 56525, 19309, 60432, 3617, 53812, 27347, 35538, 60471,
    32163, 30210, 8354, 5454, 58797, 64989, 37371, 16085, 5042, 30983, 9762, 31143,
    38764, 55852, 40706, 6711, 30097, 13732, 29461, 20233, 18477, 13848, 52082, 30907,
    34469, 34044, 62145, 46230, 57610, 58077, 40398, 17959, 2547, 3200, 11867, 27183,
    15953, 22040, 53807, 52061,
];
