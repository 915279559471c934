use crate::params::Params;

pub(crate) struct TestVector {
    pub(crate) params: Params,
    pub(crate) input: &'static [u8],
    pub(crate) nonce: [u8; 32],
    pub(crate) solution: &'static [u32],
    pub(crate) minimal: &'static [u8],
}

pub(crate) const VALID_TEST_VECTORS: &[TestVector] = &[TestVector {
    params: Params { n: 96, k: 5 },
    input: b"Equihash is an asymmetric PoW based on the Generalised Birthday problem.",
    nonce: [
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0,
    ],
    solution: &[
        2261, 15185, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
        45858, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830, 91132,
        23460, 49807, 52426, 80391, 69567, 114474, 104973, 122568,
    ],
    minimal: &[
        0x04, 0x6a, 0x8e, 0xd4, 0x51, 0xa2, 0x19, 0x73, 0x32, 0xe7, 0x1f, 0x39, 0xdb, 0x9c, 0x79,
        0xfb, 0xf9, 0x3f, 0xc1, 0x44, 0x3d, 0xa5, 0x8f, 0xb3, 0x8d, 0x05, 0x99, 0x17, 0x21, 0x16,
        0xd5, 0x55, 0xb1, 0xb2, 0x1f, 0x32, 0x70, 0x5c, 0xe9, 0x98, 0xf6, 0x0d, 0xa8, 0x52, 0xf7,
        0x7f, 0x0e, 0x7f, 0x4d, 0x63, 0xfc, 0x2d, 0xd2, 0x30, 0xa3, 0xd9, 0x99, 0x53, 0xa0, 0x78,
        0x7d, 0xfe, 0xfc, 0xab, 0x34, 0x1b, 0xde, 0xc8,
    ],
}];

/// A `(200, 9)` solution for a block header prefix carrying the easiest compact target.
pub(crate) const ZCASH_HEADER_VECTOR: TestVector = TestVector {
    params: Params::ZCASH,
    input: &[
        0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0x4c, 0x7a, 0x85, 0xb7, 0x68, 0x12, 0x3f, 0x1d,
        0xff, 0x1d, 0x4c, 0x4c, 0xec, 0xe7, 0x00, 0x83, 0xb2, 0xd2, 0x7e, 0x11, 0x7b, 0x4a, 0xc2,
        0xe3, 0x1d, 0x08, 0x79, 0x88, 0xa5, 0xea, 0xc4, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x90, 0x04, 0x13, 0x58, 0xff,
        0xff, 0x7f, 0x20,
    ],
    nonce: [0; 32],
    solution: &[
        2525, 1084336, 1321611, 1823769, 635971, 746649, 739645, 1029328, 10423, 24697, 491788,
        739334, 555339, 1803413, 830851, 1115934, 130371, 1886459, 1084719, 1199924, 237719, 642435,
        294368, 1444815, 1059207, 1832738, 1832840, 1850914, 1283722, 1583478, 1812425, 1853611,
        128812, 1684407, 710012, 878739, 761149, 1217235, 784817, 1797157, 137826, 212806, 613346,
        1057026, 565828, 615802, 1029485, 1949581, 356571, 1050978, 1023184, 1484671, 360070,
        1722892, 1291763, 1403805, 625885, 1870299, 1396937, 1684317, 866786, 1678142, 1219406,
        1545572, 2663, 26467, 43657, 1194297, 654689, 1191389, 963232, 2001215, 116026, 1193094,
        209737, 1240265, 275562, 2060487, 280422, 1184306, 46288, 1674856, 353081, 1109645, 220303,
        1755894, 823700, 984066, 355845, 881223, 1500168, 1566090, 478184, 814762, 1926328, 1945049,
        163418, 724858, 602099, 1023170, 273474, 529720, 1459560, 2060408, 314327, 1698685, 424766,
        1794422, 533297, 1573593, 569507, 1001554, 191717, 1176670, 1181832, 2044113, 334053,
        402406, 829326, 1038335, 473471, 1195624, 1328886, 2007283, 592102, 1136284, 1208727,
        1604980, 7955, 873932, 1438378, 1540947, 342530, 789792, 1274287, 1325880, 378075, 1123348,
        1171046, 1715350, 412020, 2083972, 998652, 1382486, 21281, 827918, 1379892, 1397683, 222090,
        1013327, 574577, 2032272, 74775, 1437008, 207937, 1570453, 80651, 344333, 428952, 861359,
        117935, 509481, 775781, 1945301, 118154, 544061, 1370564, 1371692, 129823, 160046, 851183,
        1737855, 769226, 2086514, 1291954, 2021077, 270599, 1511551, 865277, 1386234, 616660,
        1797267, 1695170, 1983909, 275782, 972732, 1138241, 1365359, 557197, 1186998, 1163985,
        1362699, 54501, 1057789, 605633, 1183904, 482063, 1501753, 806858, 1941075, 407217, 969549,
        1007153, 1632348, 817801, 1813701, 1039238, 1298400, 421555, 1898733, 1170908, 1321908,
        449409, 1477850, 1492568, 1991599, 524835, 2014741, 794073, 798246, 782343, 1849523,
        1071299, 1959471, 125301, 2062710, 551570, 732636, 930351, 935156, 1679696, 1816720, 256162,
        1741018, 1558921, 1830203, 598968, 1012796, 635381, 2007465, 180285, 1177281, 212112,
        966220, 502625, 969289, 1108566, 2085604, 333495, 1609050, 1537368, 2058063, 888562,
        1869321, 1689086, 2006566, 4481, 2024912, 1132323, 1456738, 138825, 436018, 156405, 1017850,
        176947, 1641352, 221133, 1312717, 412140, 896692, 434442, 1121447, 31668, 1035152, 789049,
        1523861, 552055, 1796052, 1545520, 1834855, 169176, 1840624, 328681, 1216670, 404462,
        800914, 491838, 1651096, 27917, 1030913, 187391, 810819, 904110, 1180436, 1348152, 1818718,
        95683, 1144300, 130934, 1626411, 246941, 1529245, 442201, 1867698, 181826, 1054066, 607340,
        770981, 538854, 1114900, 1715241, 2073704, 273796, 1607844, 1554065, 1626762, 336179,
        1489358, 511208, 1272813, 23397, 609979, 1132151, 1234046, 461397, 554759, 530884, 650868,
        208498, 1193716, 912276, 1433529, 383667, 1504428, 716168, 1742297, 156159, 734892, 1307757,
        1436024, 245407, 333288, 1441156, 2060840, 235906, 1754796, 736299, 780678, 788373, 1656921,
        1191318, 1511842, 289416, 1511188, 1138114, 1166401, 420156, 1995112, 1091602, 1304944,
        429504, 673197, 437256, 743106, 1003865, 1878403, 1274669, 1640820, 520150, 1758525,
        1184987, 1199314, 1257576, 1308745, 1285437, 1376370, 569539, 2005876, 1191009, 1874965,
        589515, 1122307, 1829533, 2068624, 20574, 1029700, 139822, 347173, 901570, 971931, 1042784,
        1268563, 187928, 1192974, 955478, 1413637, 220807, 377432, 1503590, 1761590, 238470,
        1915096, 928967, 2061026, 372349, 769792, 698255, 1070102, 291226, 885533, 715463, 1427650,
        883858, 1325963, 1133403, 1798321, 188599, 1759387, 1450850, 1549372, 692808, 1333038,
        945754, 1996362, 287275, 538943, 1132389, 1900331, 880972, 2049768, 1451299, 1758418,
        388898, 742871, 789867, 1479718, 634756, 1270519, 1485164, 1564306, 922116, 1165748,
        1443367, 1899944, 1472202, 1667928, 1636224, 1808754, 55748, 713237, 165063, 844040, 633590,
        1467226, 1178754, 1773717, 300295, 1859075, 1006122, 1865717, 1158120, 1241975, 1320096,
        2065245, 179502, 1985261, 1225125, 1454522, 627163, 641328, 1453457, 1609255, 853073,
        1574711, 1172395, 1654100, 954858, 1858109, 1512714, 1732193, 55919, 1340428, 754410,
        1409711, 638894, 1575742, 923207, 1090310, 387670, 1082453, 607569, 1398756, 697540,
        1457937, 744773, 1893193, 167345, 401838, 1449522, 1560959, 262009, 1542691, 1855487,
        1880992, 380445, 1089957, 1486611, 1511598, 409570, 959224, 1545922, 1937766,
    ],
    minimal: &[
        0x00, 0x4e, 0xec, 0x22, 0xec, 0x28, 0x55, 0x17, 0xbd, 0x41, 0x94, 0xda, 0x21, 0xad, 0x92,
        0x65, 0x69, 0x27, 0xaf, 0xb4, 0xd0, 0x01, 0x45, 0xb8, 0x18, 0x1e, 0x4f, 0x02, 0x18, 0xb4,
        0x80, 0x64, 0x3c, 0xa5, 0xee, 0x12, 0x55, 0x95, 0xb0, 0x71, 0x07, 0x1e, 0x0f, 0xea, 0x1f,
        0x32, 0x3e, 0xe1, 0x1a, 0x5f, 0x24, 0xf3, 0x41, 0xd0, 0x4b, 0xa7, 0x36, 0x0c, 0x8f, 0xbc,
        0x16, 0x0b, 0xcf, 0x81, 0x4c, 0x3e, 0xfd, 0xc8, 0xb7, 0xef, 0x11, 0xc3, 0xe2, 0x29, 0xcb,
        0x45, 0x60, 0xa5, 0xdb, 0x74, 0xf9, 0x3c, 0x48, 0xab, 0x0f, 0xb9, 0x66, 0x6c, 0xed, 0xd5,
        0xaa, 0xf8, 0xd6, 0x89, 0x35, 0xce, 0x9e, 0xca, 0x4b, 0x4d, 0x7f, 0x36, 0x3b, 0x6c, 0x25,
        0x10, 0xd3, 0x10, 0xcf, 0xd1, 0x92, 0xb7, 0xc5, 0x02, 0x10, 0x24, 0x51, 0x22, 0x25, 0x95,
        0xe9, 0xf6, 0xad, 0xbd, 0xbf, 0x8d, 0x2b, 0x86, 0xdc, 0x02, 0x58, 0x9f, 0x39, 0xa1, 0x6a,
        0x77, 0xf2, 0xbf, 0x43, 0x69, 0x28, 0x32, 0x76, 0xbe, 0x75, 0x6b, 0x9d, 0x4c, 0x66, 0xef,
        0x22, 0x76, 0xea, 0xa1, 0x93, 0x9b, 0x35, 0xd6, 0x9c, 0xf1, 0x66, 0x6c, 0xfa, 0x53, 0x69,
        0xd7, 0x95, 0x64, 0x00, 0x53, 0x38, 0x19, 0xd8, 0xc1, 0x55, 0x13, 0x23, 0x93, 0x94, 0xfe,
        0xb0, 0xc8, 0xb7, 0x75, 0xd6, 0x54, 0x1e, 0x89, 0x3f, 0x0e, 0x29, 0xd4, 0x8d, 0x21, 0x86,
        0x66, 0x93, 0x2e, 0xcc, 0x92, 0x1a, 0x35, 0x7d, 0xc3, 0x1c, 0x88, 0xec, 0xd2, 0x12, 0x32,
        0x05, 0xa6, 0x86, 0x63, 0x9a, 0x0a, 0xc6, 0x73, 0x0e, 0xe8, 0xd1, 0xae, 0x47, 0xeb, 0x2b,
        0xd9, 0x92, 0x32, 0x8f, 0x04, 0x02, 0x2b, 0x70, 0x2b, 0x5c, 0x91, 0xed, 0xc8, 0x11, 0x7e,
        0x58, 0xa3, 0xa5, 0xf4, 0x31, 0xba, 0xab, 0xac, 0x97, 0x1d, 0xad, 0xd9, 0x13, 0xf2, 0xd2,
        0xc3, 0xde, 0x92, 0x5f, 0xe6, 0xf9, 0xcc, 0x22, 0x16, 0x21, 0x20, 0x54, 0xe2, 0xc8, 0xad,
        0x1f, 0x70, 0x78, 0x26, 0x5e, 0xbe, 0x7a, 0xdf, 0x4c, 0xf6, 0x7d, 0xb6, 0x17, 0x64, 0x11,
        0x98, 0xe0, 0x0b, 0x65, 0x16, 0x14, 0x6f, 0x48, 0x52, 0x17, 0x67, 0x2c, 0x7d, 0x17, 0xa4,
        0x11, 0x11, 0xf3, 0x0d, 0x12, 0x8c, 0x72, 0x98, 0x8f, 0x99, 0x94, 0xf1, 0xcf, 0xd7, 0xff,
        0x39, 0xcb, 0xfc, 0x8f, 0x9a, 0x28, 0x8d, 0xed, 0xea, 0x0f, 0x34, 0x84, 0x73, 0x45, 0x5a,
        0x72, 0x4e, 0x32, 0xf8, 0x7d, 0x74, 0x00, 0xf8, 0x9b, 0x55, 0x73, 0x2b, 0xe5, 0x55, 0x78,
        0x35, 0x32, 0x9d, 0x01, 0x30, 0x34, 0x82, 0x6e, 0x35, 0xf4, 0x3b, 0x38, 0x2e, 0x26, 0xdc,
        0x49, 0x05, 0x23, 0xbc, 0xcd, 0xa2, 0xc9, 0x63, 0x24, 0xba, 0x7f, 0x32, 0x11, 0xe7, 0x9f,
        0x95, 0x18, 0x56, 0x02, 0x99, 0x0b, 0x28, 0x83, 0xaa, 0x1c, 0x69, 0x55, 0x3b, 0x31, 0xb1,
        0xc5, 0x3d, 0xd9, 0x3d, 0x18, 0x8e, 0x3f, 0x02, 0x90, 0x09, 0x20, 0xbd, 0x7b, 0x54, 0x06,
        0x58, 0x83, 0x7f, 0x69, 0x50, 0x9d, 0x85, 0x95, 0x04, 0x34, 0xd1, 0x73, 0x0d, 0x24, 0xaf,
        0x0e, 0x65, 0x79, 0xf1, 0x8a, 0x57, 0xac, 0xcb, 0xda, 0xed, 0x50, 0xe6, 0xc5, 0x21, 0x34,
        0xf6, 0x9d, 0x38, 0x94, 0xee, 0x2c, 0x0f, 0xd8, 0xf8, 0x9c, 0x4b, 0x99, 0xf9, 0xdf, 0xa8,
        0x47, 0xf5, 0xde, 0x65, 0x7f, 0x59, 0xca, 0x76, 0xd6, 0x5e, 0xd6, 0xd5, 0x21, 0x08, 0x3d,
        0xc4, 0x1f, 0xda, 0x67, 0xfb, 0x52, 0x6f, 0xa4, 0xb4, 0x6a, 0x6d, 0xb2, 0x4f, 0x3b, 0xb8,
        0x5e, 0x45, 0xa5, 0x21, 0xaa, 0x33, 0xb5, 0xef, 0x22, 0xbc, 0x83, 0x4d, 0x56, 0xf4, 0x40,
        0x46, 0xc8, 0x72, 0xda, 0x38, 0x5a, 0x34, 0xcb, 0x0b, 0x06, 0xa7, 0x2c, 0x08, 0xff, 0x52,
        0x7b, 0x83, 0x21, 0x0a, 0x03, 0xad, 0x87, 0xdb, 0xa8, 0xe5, 0x89, 0xf9, 0x5d, 0x9e, 0x53,
        0x31, 0xb5, 0x8b, 0xb2, 0xd3, 0x5e, 0xbc, 0x63, 0x8e, 0x85, 0xc6, 0x3d, 0x44, 0xee, 0xb3,
        0x15, 0xfb, 0x70, 0xd3, 0xcf, 0xe0, 0x33, 0x75, 0x9f, 0x3e, 0x3b, 0x63, 0xbb, 0xb9, 0x42,
        0xbb, 0x43, 0x6d, 0xc0, 0xda, 0x33, 0x6a, 0xd8, 0xcb, 0x1e, 0x63, 0xaf, 0x40, 0x11, 0x1f,
        0xaf, 0x85, 0x58, 0x3b, 0xb2, 0xc2, 0xe2, 0x65, 0xf8, 0x03, 0xf0, 0xe2, 0xce, 0x0b, 0x18,
        0x7d, 0xe6, 0x2f, 0x0f, 0x4b, 0xaf, 0xde, 0x5d, 0x90, 0xd5, 0x24, 0xb2, 0xdd, 0xc7, 0x19,
        0x17, 0xb9, 0x13, 0xd3, 0x34, 0x2a, 0x1b, 0xb8, 0x90, 0x1f, 0x45, 0x16, 0xa4, 0x36, 0xaf,
        0x93, 0x13, 0xbe, 0xd3, 0xb4, 0x91, 0xdc, 0x3d, 0xd0, 0xf1, 0x36, 0x3e, 0xbe, 0xa1, 0xa9,
        0x16, 0x01, 0xec, 0x7d, 0xb0, 0x46, 0x79, 0x20, 0xeb, 0xe4, 0xc3, 0xd5, 0xb0, 0xbb, 0x29,
        0x26, 0x1d, 0x4a, 0xdf, 0xd2, 0xe4, 0x28, 0xb5, 0xbe, 0x23, 0x56, 0xae, 0xea, 0xb1, 0xf6,
        0x74, 0xf6, 0xc7, 0x79, 0x72, 0x18, 0x27, 0x38, 0xbf, 0xde, 0x9e, 0x26, 0x00, 0x8c, 0x0f,
        0xb9, 0x74, 0x22, 0x8e, 0x47, 0x63, 0xa6, 0x21, 0x0f, 0x24, 0x9a, 0x9c, 0xc8, 0x4c, 0x5e,
        0xaf, 0x87, 0xfa, 0x15, 0x99, 0x9e, 0x42, 0xe2, 0x06, 0xbf, 0x9b, 0x40, 0x7c, 0xd3, 0x24,
        0xf6, 0x36, 0xba, 0xd0, 0xd4, 0x21, 0x51, 0x1c, 0xa7, 0x03, 0xdd, 0xa3, 0xf2, 0xe4, 0x18,
        0x14, 0x73, 0x74, 0x09, 0x54, 0x36, 0x3b, 0xed, 0x9f, 0x52, 0xf2, 0xa6, 0x1b, 0xff, 0x67,
        0x14, 0xa6, 0xc7, 0x05, 0x7c, 0x0a, 0x07, 0xd3, 0x29, 0x09, 0xe3, 0x15, 0xf7, 0x30, 0xe2,
        0x48, 0xf0, 0x27, 0xd9, 0x31, 0x98, 0x03, 0x68, 0x6b, 0xee, 0xc0, 0x45, 0xb7, 0xfe, 0xc5,
        0xf4, 0x36, 0xe5, 0xd7, 0x48, 0x0c, 0x52, 0x92, 0x47, 0x1b, 0xc0, 0x5e, 0x0b, 0xae, 0x1c,
        0x5d, 0x7b, 0x03, 0xfe, 0xed, 0x8d, 0x12, 0xb1, 0xe2, 0x4e, 0xdd, 0x56, 0x74, 0xd7, 0xeb,
        0x3c, 0x7f, 0xb2, 0x16, 0x32, 0x14, 0x05, 0x5c, 0x92, 0x88, 0xd8, 0xbc, 0x3a, 0x54, 0x1c,
        0x73, 0x44, 0x0c, 0x53, 0x45, 0x85, 0x3f, 0xa4, 0x68, 0x21, 0x6c, 0x26, 0x22, 0x29, 0x2f,
        0x6d, 0x23, 0x8d, 0x28, 0xa2, 0x90, 0x99, 0xda, 0xe7, 0x38, 0xf9, 0x9d, 0x13, 0x6b, 0xed,
        0x02, 0xdb, 0x2a, 0x53, 0xae, 0xe2, 0x8c, 0xef, 0x2d, 0x47, 0xe3, 0x85, 0x2a, 0xa1, 0xdc,
        0x1d, 0x03, 0x38, 0x89, 0xee, 0x74, 0x19, 0x73, 0x94, 0x8d, 0xbd, 0x1b, 0xd7, 0x29, 0x5d,
        0xfb, 0x92, 0xed, 0x59, 0xdb, 0xd2, 0xb1, 0x5d, 0xb1, 0x1a, 0x95, 0xd9, 0x13, 0x0f, 0xfa,
        0xcd, 0xab, 0x27, 0xe8, 0xdb, 0x5e, 0x97, 0x81, 0xdf, 0x4f, 0x94, 0x57, 0xa2, 0xbf, 0xb0,
        0x9f, 0x72, 0x28, 0x1c, 0xcc, 0x16, 0xb1, 0xab, 0x16, 0x78, 0x56, 0xbe, 0x98, 0x66, 0x03,
        0xca, 0xe5, 0x21, 0x66, 0x45, 0xb2, 0xd7, 0x11, 0xa2, 0x23, 0x54, 0x45, 0xc3, 0xc5, 0x22,
        0xbb, 0x85, 0x1c, 0xc4, 0x13, 0x34, 0x9e, 0x79, 0xc5, 0xa2, 0x15, 0x02, 0x53, 0xe9, 0x70,
        0x34, 0x6e, 0x02, 0x91, 0x6b, 0x4d, 0x58, 0x10, 0xb5, 0x6c, 0x27, 0xa8, 0xac, 0xf2, 0xa6,
        0x0e, 0x6e, 0x65, 0xb9, 0x09, 0x74, 0x3f, 0x7e, 0xb6, 0xb5, 0x4f, 0x64, 0x29, 0xb7, 0x24,
        0xcd, 0x29, 0x98, 0x34, 0x4f, 0xe1, 0x26, 0x73, 0xa7, 0xb5, 0x00, 0x72, 0x45, 0x86, 0x1f,
        0xa6, 0xdd, 0x24, 0x58, 0xc3, 0xc9, 0xc1, 0x54, 0x7f, 0x65, 0xc4, 0x80, 0x0f, 0x7d, 0x53,
        0xbf, 0x90, 0x90, 0x02, 0x82, 0xf3, 0xed, 0x91, 0x04, 0x44, 0x5c, 0x54, 0xc2, 0x56, 0xe0,
        0xe1, 0x3b, 0x52, 0x6d, 0xfd, 0x2c, 0x13, 0x5b, 0x53, 0x16, 0xf0, 0xc4, 0x8d, 0x03, 0x9d,
        0x28, 0xad, 0x59, 0x20, 0x51, 0xaf, 0x43, 0x97, 0x09, 0x62, 0xde, 0x2c, 0xda, 0xe1, 0x36,
        0x1d, 0x1c, 0x37, 0x4e, 0x36, 0x1c, 0x59, 0x8f, 0xf7, 0x2e, 0x22, 0xd7, 0x3e, 0xae, 0xfc,
        0x01, 0x54, 0xf1, 0xf0, 0x54, 0x16, 0x23, 0x8c, 0xd3, 0x60, 0xc7, 0x55, 0xd5, 0x8f, 0x5c,
        0x8c, 0x26, 0xbe, 0x49, 0x50, 0xee, 0x2e, 0x29, 0x6b, 0x7b, 0x70, 0xb1, 0x17, 0x05, 0xbe,
        0xb6, 0x26, 0xec, 0x46, 0xc5, 0x7a, 0x43, 0xc5, 0x49, 0x24, 0x51, 0x5c, 0xb9, 0xcd, 0xcb,
        0x5e, 0x76, 0x4a, 0x23, 0x11, 0x5a, 0x0e, 0x4f, 0xe2, 0x8e, 0xcb, 0xcf, 0xf2, 0xb6, 0xb8,
        0xa6, 0x7d, 0x1b, 0xa2, 0xc4, 0xa4, 0x7a, 0xd4, 0xd2, 0x2f, 0x79, 0x12, 0xd5, 0x75, 0xd8,
        0x1a, 0xd7, 0x69, 0x42, 0x64, 0xd7, 0xc2, 0x4d, 0x8b, 0xde, 0xd5, 0x2d, 0x97, 0xde, 0x92,
        0x70, 0x90, 0x24, 0x72, 0x6d, 0x2c, 0x0c, 0x4f, 0xcf, 0xda, 0x8b, 0x3b, 0x65, 0x65, 0xcd,
        0x63, 0x1e, 0xf0, 0x1b, 0x99, 0x72, 0x06, 0xce, 0x22, 0xb8, 0x85, 0x45, 0x09, 0x8e, 0xce,
        0x10, 0x84, 0xd5, 0x7b, 0x59, 0x8d, 0x6a, 0x3f, 0x90, 0x5b, 0x10, 0x95, 0x24, 0xa8, 0x3f,
        0x17, 0x80, 0xde, 0xb4, 0x55, 0xc7, 0x7f, 0x58, 0xd5, 0xf4, 0x4b, 0xcd, 0xde, 0x84, 0x94,
        0x1f, 0x83, 0x5d, 0x15, 0xe9, 0x77, 0x92, 0xbb, 0x65, 0x63, 0x4b, 0x63, 0x1b, 0xa4, 0xc8,
        0xed, 0xa7, 0x24, 0xc2, 0xc5, 0xb2, 0x38, 0x8e, 0x27, 0x68, 0x22, 0x8e, 0x01, 0xcd, 0xe3,
        0xc7, 0x57, 0x93, 0xd5, 0x47, 0x48, 0xf5, 0x71, 0x68, 0xf6, 0xe2, 0xa1, 0x5a, 0x6e, 0x61,
        0x06, 0xd3, 0x7d, 0x1d, 0x03, 0x17, 0x05, 0xd5, 0x58, 0x2a, 0xf4, 0xdf, 0xd7, 0x60, 0x2c,
        0xf9, 0xc2, 0xc8, 0xf0, 0xa3, 0x06, 0x2f, 0x52, 0xb4, 0x21, 0x15, 0x52, 0x8a, 0xa3, 0x55,
        0x7e, 0x45, 0x52, 0x62, 0x58, 0xfc, 0x45, 0x6b, 0xa8, 0xbc, 0xe3, 0x49, 0x14, 0x6d, 0x89,
        0x88, 0x6b, 0xac, 0x3c, 0x65, 0x7d, 0x17, 0xf1, 0xff, 0xbc, 0xde, 0x28, 0x8f, 0x89, 0xff,
        0xfc, 0xb3, 0xa0, 0x2e, 0x70, 0xec, 0x28, 0x69, 0x6d, 0x5e, 0x27, 0x71, 0x0a, 0xe3, 0x1f,
        0xf1, 0x3a, 0x8b, 0xe2, 0xf2, 0xd8, 0x5d, 0x91, 0x66,
    ],
};

/// A mainnet-sized `(200, 9)` solution with its decoded indices.
pub(crate) struct MinimalVector {
    pub(crate) minimal: &'static [u8],
    pub(crate) indices: &'static [u32],
}

pub(crate) const ZCASH_SOLUTION: MinimalVector = MinimalVector {
    minimal: &[
        0x00, 0x94, 0x9d, 0x55, 0xde, 0x0c, 0xc6, 0x33, 0xe0, 0xcc, 0xe4, 0x1e, 0x46, 0x49, 0xef,
        0x4a, 0xa3, 0x34, 0x9f, 0x01, 0x00, 0x29, 0x0f, 0xfe, 0x28, 0x1b, 0x94, 0x7b, 0x3b, 0x53,
        0xfb, 0xd2, 0xf3, 0x5b, 0x1c, 0xe2, 0x92, 0x64, 0x9b, 0x96, 0xac, 0x6e, 0x08, 0x83, 0xaf,
        0x3a, 0x68, 0x44, 0xb9, 0x55, 0x92, 0xe7, 0x45, 0x56, 0xda, 0x34, 0x4b, 0x47, 0x01, 0x96,
        0x1c, 0xd4, 0x13, 0x0c, 0x68, 0x21, 0x9c, 0xfa, 0x13, 0x41, 0xd5, 0xaf, 0xb5, 0x04, 0x9e,
        0xb0, 0xe8, 0xbe, 0x4a, 0x2d, 0x92, 0xd6, 0x78, 0xc4, 0x07, 0x85, 0xe3, 0x37, 0x05, 0x54,
        0x8b, 0x5f, 0x3a, 0x54, 0xf0, 0xa4, 0xc3, 0x9a, 0x2f, 0x58, 0xee, 0x78, 0x4a, 0x24, 0x16,
        0x3c, 0xd8, 0x6f, 0x54, 0x81, 0x23, 0x27, 0xdf, 0x55, 0xe1, 0xd5, 0x5c, 0xa8, 0x4b, 0x6e,
        0x7b, 0x88, 0x7a, 0x7c, 0xbf, 0xb9, 0x09, 0x1a, 0x58, 0x5b, 0xdb, 0x8e, 0xa4, 0x75, 0x93,
        0x07, 0xc5, 0x6c, 0x1b, 0x3d, 0xaf, 0xc6, 0x69, 0x24, 0x5a, 0x6f, 0x65, 0x4b, 0x6f, 0x73,
        0x00, 0x52, 0x26, 0x6a, 0x01, 0xad, 0x4f, 0x9c, 0x0b, 0x59, 0xed, 0x4e, 0x17, 0x71, 0x2b,
        0x3e, 0x72, 0xdf, 0x04, 0x98, 0xaa, 0x8d, 0xe4, 0x88, 0x8f, 0x99, 0x35, 0x31, 0xc6, 0x0a,
        0xcd, 0xed, 0x1d, 0x4b, 0x66, 0xe8, 0x9d, 0xe0, 0xb6, 0x48, 0x2c, 0xcc, 0xd4, 0xa7, 0x12,
        0xf5, 0xcf, 0x9d, 0x4c, 0xa8, 0x3b, 0xe0, 0xf9, 0x22, 0xde, 0x2c, 0x1d, 0xbb, 0x3a, 0x14,
        0x07, 0x48, 0x0d, 0xbe, 0x87, 0x95, 0x99, 0x3d, 0x8b, 0xe6, 0x40, 0x98, 0x8a, 0xbf, 0xe7,
        0xa8, 0xa1, 0xb3, 0x3a, 0x12, 0x13, 0x1c, 0x45, 0x1e, 0x1a, 0xbc, 0x0d, 0x83, 0xfb, 0x85,
        0x18, 0x62, 0xc6, 0x37, 0xce, 0x72, 0x4d, 0x5f, 0xe9, 0x7a, 0xa9, 0xa8, 0x06, 0xcf, 0x34,
        0xba, 0xb5, 0x09, 0xf4, 0x55, 0x4b, 0x0c, 0xd1, 0x0a, 0x7d, 0xdf, 0xd5, 0x82, 0x1b, 0x09,
        0x1a, 0xd2, 0xc9, 0x0c, 0x1a, 0xa1, 0xd8, 0x1e, 0xb3, 0xd7, 0x2d, 0xb4, 0x19, 0x93, 0xb6,
        0x48, 0xf4, 0x1e, 0x21, 0x38, 0xff, 0x95, 0x31, 0xa3, 0x0f, 0xf7, 0x3b, 0x22, 0x14, 0x0e,
        0x4e, 0xbd, 0x7b, 0xaa, 0x33, 0x84, 0x8e, 0x51, 0x2d, 0x99, 0x30, 0x0c, 0x5c, 0x13, 0x1c,
        0x6e, 0x75, 0xf5, 0x71, 0x4a, 0x5c, 0x6d, 0xcb, 0x17, 0x8b, 0x4a, 0x49, 0x78, 0xda, 0xc8,
        0x3a, 0xd4, 0x12, 0xfb, 0xd6, 0x92, 0x01, 0x92, 0x50, 0xc5, 0x53, 0x04, 0x9a, 0xad, 0x45,
        0x79, 0x84, 0xbe, 0xdf, 0xc9, 0x6a, 0xe7, 0x01, 0xc6, 0x59, 0xbc, 0x70, 0x07, 0xa9, 0x7d,
        0x0a, 0x90, 0x02, 0xb9, 0x45, 0xbd, 0xec, 0x45, 0xa9, 0x45, 0xef, 0x62, 0x85, 0xb2, 0xcd,
        0x55, 0x3b, 0x4c, 0x09, 0xd9, 0x07, 0xc6, 0x27, 0x86, 0x3f, 0x03, 0x99, 0xe8, 0x72, 0x5b,
        0x4f, 0xf7, 0xfc, 0x59, 0x79, 0xe3, 0xcf, 0xf2, 0x28, 0x14, 0x50, 0x84, 0x48, 0xef, 0x8b,
        0x98, 0x31, 0xc2, 0x85, 0x95, 0x93, 0x33, 0x39, 0x6a, 0xa3, 0x62, 0xa5, 0x1c, 0xf2, 0x05,
        0x09, 0x7a, 0xfa, 0xbe, 0xc1, 0x5e, 0x41, 0xfb, 0x6e, 0x30, 0xb6, 0x22, 0x37, 0x4b, 0xf5,
        0x8b, 0x37, 0xef, 0x9d, 0x1b, 0x24, 0x1e, 0xad, 0x5a, 0x68, 0x2b, 0x98, 0xb6, 0x57, 0x49,
        0xa5, 0x75, 0x68, 0xe2, 0x38, 0xd5, 0x0a, 0xfd, 0x41, 0x7e, 0x1e, 0x96, 0x0e, 0x7b, 0x5a,
        0x06, 0x4f, 0xd9, 0xf6, 0x94, 0xd7, 0x83, 0xa2, 0xcb, 0xcd, 0x58, 0x55, 0x2d, 0xed, 0xbb,
        0x9e, 0x5e, 0x11, 0x23, 0x67, 0x4e, 0xf7, 0x3a, 0x52, 0x41, 0x96, 0xcf, 0x05, 0xd3, 0xe5,
        0x24, 0x66, 0x05, 0x49, 0xff, 0xe7, 0xbd, 0x65, 0x68, 0x05, 0x71, 0x35, 0xff, 0xd5, 0xaf,
        0xd9, 0x43, 0xf6, 0xda, 0x11, 0xcb, 0xb5, 0x97, 0xe8, 0xcc, 0xec, 0xd7, 0x7e, 0xcb, 0xe9,
        0x09, 0xde, 0x06, 0x31, 0xbf, 0xa2, 0x9c, 0xd3, 0xe3, 0xd5, 0x54, 0x46, 0x71, 0xba, 0x80,
        0x25, 0x61, 0x53, 0xd6, 0xe9, 0x99, 0x0b, 0x88, 0xad, 0x8e, 0x0c, 0xf4, 0x98, 0x9b, 0xef,
        0x4b, 0xe4, 0x57, 0xf9, 0xc7, 0xb0, 0xf1, 0xaa, 0xcd, 0x6e, 0x0e, 0xf3, 0x20, 0x60, 0x5c,
        0x29, 0xed, 0x0c, 0xd2, 0xeb, 0x6c, 0xfc, 0xe2, 0x16, 0xc5, 0x2a, 0x31, 0x75, 0x80, 0x20,
        0x1c, 0xad, 0x7a, 0x09, 0x43, 0xd2, 0x4b, 0x7b, 0x06, 0xd5, 0xbf, 0x75, 0x87, 0x61, 0xdd,
        0x96, 0xe1, 0x19, 0x70, 0xb5, 0xde, 0xd6, 0x97, 0x22, 0x2b, 0x2c, 0x77, 0xe7, 0xf2, 0x56,
        0xa6, 0x05, 0xac, 0x75, 0x55, 0x49, 0xc1, 0x65, 0x1f, 0x25, 0xad, 0xfc, 0x9d, 0x53, 0xd9,
        0x11, 0x7e, 0x3a, 0x0b, 0xb4, 0x09, 0xee, 0xe4, 0xa6, 0x00, 0x12, 0x04, 0x72, 0x94, 0x9c,
        0x7d, 0xda, 0x1c, 0x2e, 0xdb, 0x3c, 0x33, 0x0c, 0x7f, 0x96, 0x17, 0x99, 0x82, 0x91, 0x64,
        0x57, 0xd3, 0x31, 0xe9, 0x63, 0x09, 0xdd, 0x24, 0xdf, 0x74, 0xee, 0xdd, 0x00, 0xe7, 0xdb,
        0x49, 0x7e, 0xe1, 0x30, 0xf7, 0x7d, 0xe6, 0x66, 0xeb, 0x55, 0x7f, 0xb3, 0x16, 0xe8, 0x7a,
        0xda, 0xf1, 0x81, 0x3c, 0xe4, 0x26, 0xa4, 0x58, 0xa6, 0xee, 0xe3, 0xa8, 0x5b, 0x2a, 0xb8,
        0x8f, 0x65, 0x53, 0xaa, 0xda, 0xe8, 0xde, 0x65, 0x2e, 0x21, 0x1a, 0x1d, 0x9f, 0x33, 0x4d,
        0x59, 0x6b, 0x5e, 0xb6, 0x17, 0x34, 0x07, 0xef, 0xcc, 0x2e, 0x81, 0x54, 0xbb, 0x9c, 0xa1,
        0x21, 0x2a, 0xa9, 0xa1, 0xa1, 0x12, 0x1d, 0x2f, 0x5a, 0x77, 0x12, 0xcf, 0x25, 0xcc, 0x81,
        0x48, 0xb8, 0x05, 0x2e, 0x0d, 0x2e, 0x09, 0xf2, 0x0e, 0x5b, 0xa2, 0xa9, 0x82, 0x77, 0xe9,
        0x75, 0xb0, 0xee, 0xd9, 0xa8, 0x92, 0x06, 0x96, 0x63, 0x37, 0x16, 0x3f, 0x21, 0x5c, 0x9d,
        0x04, 0xa6, 0x59, 0x8b, 0x09, 0x58, 0xd3, 0x33, 0xd8, 0x46, 0x77, 0x3c, 0x69, 0xe5, 0xab,
        0xfd, 0x0a, 0x04, 0x27, 0xf3, 0x66, 0x06, 0x14, 0xdd, 0x82, 0xb7, 0x9a, 0xdb, 0x85, 0x1a,
        0x0d, 0x58, 0xb6, 0x2d, 0xf5, 0xf0, 0xb3, 0xac, 0x83, 0x6e, 0x6e, 0x25, 0xf3, 0xa5, 0x1f,
        0x49, 0xa9, 0x9a, 0xde, 0x57, 0x79, 0x6f, 0xe9, 0xfc, 0xc2, 0x6f, 0x0a, 0x1f, 0x94, 0xff,
        0x08, 0x19, 0xfe, 0x52, 0xb7, 0x50, 0x87, 0xed, 0xbe, 0xd3, 0xa8, 0x16, 0x26, 0xeb, 0x54,
        0x16, 0xc6, 0x65, 0x57, 0xf1, 0x1c, 0x0f, 0xce, 0xdf, 0xf2, 0x23, 0xd6, 0xaa, 0x8c, 0xd5,
        0xc3, 0x53, 0x86, 0xe5, 0xb4, 0xb9, 0x5a, 0x0f, 0x03, 0x92, 0xca, 0x30, 0x1a, 0x38, 0xb3,
        0x68, 0x7d, 0x09, 0x44, 0x93, 0xb9, 0xe9, 0xd2, 0x64, 0xd0, 0x7a, 0x19, 0x0c, 0xe5, 0x7d,
        0x11, 0x68, 0x04, 0x38, 0x2a, 0x3f, 0xab, 0xe1, 0x5a, 0xf4, 0xdf, 0x4f, 0xa0, 0x43, 0xf0,
        0x28, 0x7a, 0xa1, 0xed, 0x55, 0x68, 0xd9, 0xef, 0x5d, 0x12, 0x51, 0x0d, 0x01, 0x0c, 0xcd,
        0xab, 0x4e, 0xb6, 0x16, 0xf6, 0xdf, 0x13, 0xbb, 0x31, 0x26, 0xef, 0x43, 0xd9, 0xd6, 0x57,
        0x35, 0xe4, 0xe4, 0xc0, 0x4b, 0x57, 0x63, 0x48, 0xd0, 0x40, 0xb5, 0x35, 0x05, 0x5a, 0x3d,
        0x5a, 0xe1, 0x91, 0xb7, 0x5f, 0x06, 0x12, 0xf3, 0xb2, 0x40, 0x66, 0xa0, 0x52, 0x45, 0xf2,
        0x7f, 0xe5, 0x7b, 0xda, 0x66, 0xbd, 0x6d, 0xec, 0x7e, 0x4f, 0xc9, 0xcb, 0x23, 0x68, 0x02,
        0x06, 0x2a, 0xdd, 0xe3, 0xcd, 0x0e, 0x31, 0x34, 0x82, 0xc9, 0x2a, 0x0c, 0x72, 0x11, 0x02,
        0xb1, 0xf3, 0x8b, 0x01, 0x5a, 0xb8, 0xd0, 0x15, 0x59, 0xcb, 0xcb, 0x40, 0xf6, 0x74, 0xe9,
        0xef, 0xad, 0x5e, 0xe9, 0xc2, 0xfe, 0x13, 0x3f, 0xaa, 0x55, 0xca, 0x1d, 0xd0, 0xff, 0x26,
        0x71, 0x0f, 0x9d, 0xa8, 0x19, 0xcc, 0x14, 0x59, 0xcb, 0x7e, 0xd2, 0x60, 0xda, 0xd3, 0xdb,
        0x05, 0x96, 0x25, 0x8d, 0x47, 0xc7, 0x4c, 0x32, 0xa8, 0xb8, 0x52, 0xb6, 0x71, 0xc5, 0xa0,
        0xca, 0xa2, 0x00, 0x16, 0x03, 0xd9, 0x0c, 0x91, 0xa7, 0xdf, 0x2e, 0x2d, 0x4e, 0xe9, 0xae,
        0x9b, 0xf1, 0xa6, 0xb1, 0xec, 0x88, 0x15, 0x1c, 0x62, 0x36, 0x0d, 0x03, 0x02, 0x4d, 0x2e,
        0x2d, 0x01, 0x14, 0x08, 0x4f, 0x6b, 0x88, 0xc5, 0xbb, 0xa2, 0x4a, 0xa7, 0xce, 0xcf, 0xac,
        0x16, 0xe9, 0x1e, 0x0b, 0xaf, 0x3d, 0x86, 0x53, 0xe2, 0x18, 0x09, 0x3e, 0x81, 0xd2, 0xa6,
        0x3c, 0x32, 0xef, 0xf1, 0xd9, 0x03, 0x0f, 0x9e, 0x14, 0x14, 0xec, 0xe4, 0x20, 0xda, 0xa2,
        0x4e, 0x0d, 0xd5, 0xb8, 0x45, 0xb3, 0x27, 0x4b, 0xb8, 0x39, 0xca, 0x1c, 0x53, 0xbc, 0xc0,
        0x19, 0x42, 0x42, 0xd7, 0x4b, 0x26, 0x31, 0xb9, 0x49, 0x5a, 0x65, 0x4f, 0xbb, 0xdc, 0xbf,
        0xad, 0x77, 0x9f, 0x73, 0x22, 0xb6, 0x07, 0x36, 0x24, 0x98, 0x80, 0x60, 0x48, 0x21, 0xd9,
        0x69, 0x24, 0xe3, 0xfa, 0x39, 0x7f, 0x35, 0x4a, 0x5e, 0xcc, 0xa3, 0x4f, 0x61, 0x4d, 0xa5,
        0x45, 0x6f, 0x9b, 0x36, 0x33, 0x8c, 0x37, 0xd8, 0xf6, 0xfb, 0xf6, 0x26, 0xbe, 0x98, 0x34,
        0x77, 0x76, 0x60, 0x22, 0x87, 0x27, 0x46, 0xda, 0x10, 0xa1, 0x77, 0x1c, 0xeb, 0x02, 0xdd,
        0x8a, 0xac, 0x01, 0xba, 0x18, 0x6b, 0xf1, 0x48, 0x86, 0x30, 0x47, 0x9e, 0x12, 0x84, 0xda,
        0x01, 0x90, 0xfc, 0xe8, 0xb5, 0x9a, 0xc6, 0xb0, 0xfd, 0x41, 0x6b, 0xee, 0x56, 0xb7, 0x2f,
        0x0a, 0x58, 0x45, 0x15, 0x35, 0x57, 0xff, 0x0f, 0x49, 0x50, 0xa0, 0xdc, 0x5b, 0xe6, 0x5c,
        0xe9, 0x42, 0xd2, 0x2e, 0x18, 0x53, 0x4c, 0x4e, 0x0e, 0xfa, 0xbb, 0x2d, 0x15, 0x25, 0xdc,
        0x48, 0x58, 0xb9, 0xb0, 0xf7, 0x7d, 0x47, 0x4a, 0x12, 0x5e, 0xbc, 0x25, 0x0e, 0x08, 0xfe,
        0xdb, 0xfa, 0xa6, 0x6f, 0x45, 0x3d, 0x90, 0x93, 0x2c, 0xab, 0x3f, 0xf4, 0x52, 0x21, 0x90,
        0x99, 0x68, 0xe5, 0x1e, 0x6b, 0xc2, 0x54, 0xd5, 0x09, 0xad, 0xeb, 0x75, 0xcb, 0xa7, 0x6d,
        0x48, 0xfe, 0x02, 0x4e, 0x3e, 0x66, 0xd8, 0xdf, 0x5e,
    ],
    indices: &[
        4755, 1398648, 418585, 1969358, 539788, 1211346, 1382820, 2031872, 336383, 1613934, 671133,
        1392573, 386742, 473252, 1254620, 1485934, 69749, 1894817, 154794, 1650292, 699828, 856785,
        1576112, 1889299, 101636, 422888, 631018, 1768272, 605537, 1716114, 1141910, 1472708,
        61628, 842773, 673199, 1287503, 84359, 429014, 488386, 664598, 498445, 1921540, 1151983,
        1400349, 702800, 1235870, 1852371, 1884089, 74571, 94062, 479802, 1650812, 710710, 1010673,
        1263906, 1732453, 617966, 786760, 1258752, 1758457, 1578675, 1790853, 1804633, 1995487,
        37653, 669586, 280524, 1266460, 791963, 1787730, 1783620, 1958070, 591257, 1266332, 621287,
        1692874, 1079233, 1984695, 1138925, 1784340, 59649, 1505822, 707742, 1621604, 78101,
        1047018, 331161, 1708563, 231587, 1600240, 442877, 1593734, 363631, 1285267, 720715,
        1747368, 55782, 1239764, 326186, 1355981, 136443, 1570144, 1103944, 1757897, 99156, 483450,
        1698710, 1786265, 486545, 1902472, 641020, 1388963, 130791, 821328, 468830, 1555107,
        461084, 1330022, 622690, 1839900, 904894, 1426729, 931557, 1145012, 1348337, 1487374,
        1482903, 1824402, 12874, 202060, 150870, 1333144, 622015, 1202873, 1576498, 1686640, 62767,
        1321536, 89250, 1826500, 742027, 1824929, 890474, 1391436, 80672, 2037918, 204673, 1678983,
        308895, 1965846, 773918, 1045032, 166416, 1123262, 379928, 1845337, 730726, 940712,
        1774888, 1896965, 77663, 719621, 991485, 1499915, 803950, 1244514, 1687420, 1907492,
        251307, 630958, 809771, 1350231, 709060, 931138, 1567243, 1973910, 118635, 530751, 850762,
        882746, 366490, 1447243, 1011164, 1990161, 290025, 1826025, 598219, 847965, 510536,
        1671506, 1048381, 1926504, 44582, 1572694, 1567905, 2059681, 235371, 391731, 485051,
        2018281, 80832, 1623806, 1134185, 1981781, 560355, 958473, 723614, 1501593, 94485, 1456179,
        1723469, 2028734, 569331, 1174588, 874091, 921331, 265227, 1091508, 420213, 1494990,
        273802, 691293, 786688, 1879418, 75898, 601580, 223967, 1529974, 244525, 1590876, 372470,
        1480482, 353678, 2072521, 742146, 1754965, 693122, 1656777, 880612, 1922009, 143303,
        536272, 325490, 679937, 264421, 337695, 970977, 973628, 418191, 1988702, 835912, 1459581,
        418770, 1622647, 599803, 1371869, 7419, 861691, 1087611, 1564262, 906922, 2092229, 1524694,
        1765761, 498820, 1741154, 1275761, 1738162, 1405214, 1660138, 1496902, 1991982, 271171,
        1473741, 437429, 1436513, 944143, 1831691, 1313445, 1809569, 271701, 427652, 593559,
        1419121, 368203, 1253458, 376873, 920878, 81473, 1666698, 1360187, 2004827, 122291, 664705,
        1356569, 1513023, 273299, 1315481, 836996, 1412403, 503948, 1953562, 994655, 1903108,
        327276, 1579091, 967003, 1682872, 668698, 1453451, 1027973, 1289347, 904644, 1560212,
        1025236, 1682917, 979679, 1736496, 1275984, 2069759, 66367, 1657565, 541686, 1830202,
        1059917, 1758469, 1454890, 1569052, 129499, 2082959, 742726, 875573, 462283, 863830,
        1079324, 1231408, 214806, 893428, 303689, 1810077, 313760, 2000451, 469992, 1140740,
        460103, 2011013, 883311, 1374724, 516176, 2009211, 699206, 1699677, 150049, 1311795,
        447911, 745839, 900647, 969801, 1538590, 1693271, 441500, 1245485, 766372, 853003, 682506,
        1478486, 1510541, 1531654, 155254, 590234, 1059106, 2041854, 718772, 1683291, 1008626,
        1034699, 290048, 530603, 979430, 1106707, 591250, 688924, 1083413, 1176459, 11095, 213077,
        845285, 1314663, 644063, 743354, 923632, 1261482, 702787, 1524732, 1259655, 1694337,
        1284136, 1471199, 1479430, 1758171, 45764, 1455391, 239129, 691077, 355555, 1140786,
        1380352, 1442777, 102964, 2063544, 1484660, 1763775, 216419, 1778181, 582417, 1445123,
        18853, 1618948, 656423, 1489036, 751428, 1223155, 1473888, 1501470, 95719, 1448271,
        1117188, 1304605, 347256, 834556, 968728, 1023508, 171420, 1082218, 1124102, 1923972,
        747086, 1240590, 938210, 1293504, 206920, 744748, 1251548, 1349030, 696183, 1519595,
        769275, 1254070, 59076, 1204737, 1057808, 1939090, 641012, 942029, 676598, 828239, 797108,
        1381822, 891673, 1622909, 1175031, 1935791, 1360291, 1537632, 282852, 1907560, 544955,
        1167024, 375573, 721006, 1098591, 1132678, 395507, 1591827, 852168, 1035915, 734605,
        802640, 745330, 1488687, 84744, 1332437, 786311, 1348874, 112823, 1677114, 661137, 923731,
        625089, 1829612, 1477266, 1950853, 1143649, 1957713, 1724562, 2014245, 114975, 1798122,
        1259426, 1300745, 416086, 1047828, 1117316, 1665253, 249208, 611156, 317173, 1531066,
        973457, 2064531, 1176374, 1630046,
    ],
};
